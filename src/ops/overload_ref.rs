// Not sub mod but separate file for operators with a borrowed left operand.
// Used by include! macro in ops mod.

/* ------------------------------------------------------------ */

impl<'a, 'b> Add<&'b Integer> for &'a Integer {
    type Output = Integer;
    fn add(self, rhs: &'b Integer) -> Integer {
        add_signed(self.view(), rhs.view())
    }
}

/// Reuses the storage of the owned right operand.
impl<'a> Add<Integer> for &'a Integer {
    type Output = Integer;
    fn add(self, rhs: Integer) -> Integer {
        rhs + self
    }
}

impl<'a, 'b> Sub<&'b Integer> for &'a Integer {
    type Output = Integer;
    fn sub(self, rhs: &'b Integer) -> Integer {
        sub_signed(self.view(), rhs.view())
    }
}

/// Computes `-(rhs - self)` in the storage of the owned right operand.
impl<'a> Sub<Integer> for &'a Integer {
    type Output = Integer;
    fn sub(self, mut rhs: Integer) -> Integer {
        rhs -= self;
        -rhs
    }
}

impl<'a, 'b> Mul<&'b Integer> for &'a Integer {
    type Output = Integer;
    fn mul(self, rhs: &'b Integer) -> Integer {
        mul_signed(self.view(), rhs.view())
    }
}

impl<'a> Mul<Integer> for &'a Integer {
    type Output = Integer;
    fn mul(self, rhs: Integer) -> Integer {
        rhs * self
    }
}
