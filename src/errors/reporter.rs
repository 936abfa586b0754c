use super::errors::Error;

/// Sink for positioned diagnostics.
///
/// Reporting never transfers control: the scanner decides on its own whether a
/// malformed construct also yields a `TK_NONE` token.
pub trait Reporter {
    fn report(&mut self, error: Error);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: Error) {
        (**self).report(error);
    }
}

/// Collects every diagnostic in the order it was reported.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: Error) {
        self.errors.push(error);
    }
}
