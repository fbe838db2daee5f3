/// Derives the owned and mixed-reference forms of a binary operator from the
/// `&T op &T` implementation.
macro_rules! forward_binop {
    (impl $imp: ident, $method: ident for $t: ty => $out: ty) => {
        impl $imp<$t> for $t {
            type Output = $out;

            fn $method(self, rhs: $t) -> Self::Output {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&$t> for $t {
            type Output = $out;

            fn $method(self, rhs: &$t) -> Self::Output {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<$t> for &$t {
            type Output = $out;

            fn $method(self, rhs: $t) -> Self::Output {
                $imp::$method(self, &rhs)
            }
        }
    };
}

/// Compound assignment rebinds the receiver to a freshly computed value.
macro_rules! forward_assign_op {
    (impl $imp: ident, $method: ident, $op_imp: ident, $op: ident for $t: ty) => {
        impl $imp<$t> for $t {
            fn $method(&mut self, rhs: $t) {
                *self = $op_imp::$op(&*self, &rhs);
            }
        }

        impl $imp<&$t> for $t {
            fn $method(&mut self, rhs: &$t) {
                *self = $op_imp::$op(&*self, rhs);
            }
        }
    };
}
