// Not sub mod but separate file for operators with an owned left operand.
// Used by include! macro in ops mod.

/* ------------------------------------------------------------ */

impl<'b> AddAssign<&'b Integer> for Integer {
    fn add_assign(&mut self, rhs: &'b Integer) {
        self.add_signed_assign(rhs.view());
    }
}

impl AddAssign<Integer> for Integer {
    fn add_assign(&mut self, rhs: Integer) {
        *self += &rhs;
    }
}

/// Subtraction adds the negated view of `rhs`; `rhs` itself is not modified.
impl<'b> SubAssign<&'b Integer> for Integer {
    fn sub_assign(&mut self, rhs: &'b Integer) {
        self.add_signed_assign(rhs.view().negate());
    }
}

impl SubAssign<Integer> for Integer {
    fn sub_assign(&mut self, rhs: Integer) {
        *self -= &rhs;
    }
}

impl<'b> MulAssign<&'b Integer> for Integer {
    fn mul_assign(&mut self, rhs: &'b Integer) {
        self.mul_signed_assign(rhs.view());
    }
}

impl MulAssign<Integer> for Integer {
    fn mul_assign(&mut self, rhs: Integer) {
        *self *= &rhs;
    }
}

/* ------------------------------------------------------------ */

impl<'b> Add<&'b Integer> for Integer {
    type Output = Integer;
    fn add(mut self, rhs: &'b Integer) -> Integer {
        self += rhs;
        self
    }
}

impl Add<Integer> for Integer {
    type Output = Integer;
    fn add(mut self, rhs: Integer) -> Integer {
        self += &rhs;
        self
    }
}

impl<'b> Sub<&'b Integer> for Integer {
    type Output = Integer;
    fn sub(mut self, rhs: &'b Integer) -> Integer {
        self -= rhs;
        self
    }
}

impl Sub<Integer> for Integer {
    type Output = Integer;
    fn sub(mut self, rhs: Integer) -> Integer {
        self -= &rhs;
        self
    }
}

impl<'b> Mul<&'b Integer> for Integer {
    type Output = Integer;
    fn mul(mut self, rhs: &'b Integer) -> Integer {
        self *= rhs;
        self
    }
}

impl Mul<Integer> for Integer {
    type Output = Integer;
    fn mul(mut self, rhs: Integer) -> Integer {
        self *= &rhs;
        self
    }
}
