//! When big-integer arithmetic or conversion goes wrong.

use crate::lib::fmt::{self, Debug, Display};
use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use alloc::string::ToString;
use core::result;

/// This type represents all possible errors that can occur when parsing,
/// formatting or dividing big integers.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible,
    /// so that `Result<Integer>` stays close to the size of `Integer`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigmath::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset into the parsed input at which the error was
    /// detected.
    ///
    /// Errors that are not tied to a position in some input, such as division
    /// by zero, report offset 0.
    pub fn offset(&self) -> usize {
        self.err.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Arithmetic` - the operation has no defined result
    /// - `Category::Syntax` - input text or radix is not acceptable
    /// - `Category::Resource` - memory for the result could not be reserved
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::InvalidDigit(_, _) | ErrorCode::InvalidRadix(_) => Category::Syntax,
            ErrorCode::AllocationFailure => Category::Resource,
        }
    }

    /// Returns true if this error was caused by an operation without a
    /// defined result, such as division by zero.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by unacceptable input text or an
    /// unsupported radix.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a failure to reserve memory.
    pub fn is_resource(&self) -> bool {
        self.classify() == Category::Resource
    }
}

/// Categorizes the cause of a `bigmath::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The operation has no defined result for its operands.
    Arithmetic,

    /// The input text contained a character that is not a digit in the
    /// requested radix, or the radix itself is not supported.
    Syntax,

    /// Memory for the result could not be reserved.
    Resource,
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

/// This type describes all possible errors that can occur when working with
/// big integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// The divisor of a division or modulo was zero.
    DivisionByZero,

    /// A character whose digit value is not below the radix.
    InvalidDigit(char, u32),

    /// A radix outside the supported range `2..=36`.
    InvalidRadix(u32),

    /// The allocator could not provide the requested digit storage.
    AllocationFailure,
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }

    #[cold]
    pub(crate) fn division_by_zero() -> Self {
        Error::new(ErrorCode::DivisionByZero, 0)
    }

    #[cold]
    pub(crate) fn invalid_radix(radix: u32) -> Self {
        Error::new(ErrorCode::InvalidRadix(radix), 0)
    }
}

impl From<TryReserveError> for Error {
    #[cold]
    fn from(_: TryReserveError) -> Self {
        Error::new(ErrorCode::AllocationFailure, 0)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::InvalidDigit(c, radix) => {
                write!(f, "invalid digit `{}` for radix {}", c.escape_debug(), radix)
            }
            ErrorCode::InvalidRadix(radix) => {
                write!(f, "invalid radix {}, expected 2..=36", radix)
            }
            ErrorCode::AllocationFailure => f.write_str("memory allocation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::InvalidDigit(_, _) => {
                write!(f, "{} at offset {}", self.code, self.offset)
            }
            _ => Display::fmt(&self.code, f),
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, offset: {})",
            self.err.code.to_string(),
            self.err.offset
        )
    }
}
