//! Conversions from external error types into `SeedError`.

use figment::Error as FigmentError;

use super::SeedError;

impl From<FigmentError> for SeedError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(Box::new(e))
    }
}
