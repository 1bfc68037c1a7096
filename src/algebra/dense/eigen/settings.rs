use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the symmetric eigendecomposition
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EigenSettings<T: FloatT> {
    ///relative tolerance for treating an off-diagonal entry as zero
    #[builder(default = "T::epsilon()")]
    pub tol: T,

    ///maximum number of QL sweeps allowed per eigenvalue
    #[builder(default = "30")]
    pub max_iter: u32,
}

impl<T> Default for EigenSettings<T>
where
    T: FloatT,
{
    fn default() -> EigenSettings<T> {
        EigenSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> EigenSettings<T>
where
    T: FloatT,
{
    /// Checks that all settings hold legal values
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tol(self.tol)?;
        validate_max_iter(self.max_iter)?;
        Ok(())
    }
}

fn validate_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if !(tol.is_finite() && tol > T::zero()) {
        return Err(SettingsError::BadFieldValue("tol"));
    }
    Ok(())
}

fn validate_max_iter(max_iter: u32) -> Result<(), SettingsError> {
    if max_iter == 0 {
        return Err(SettingsError::BadFieldValue("max_iter"));
    }
    Ok(())
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for EigenSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        EigenSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> EigenSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.tol {
            validate_tol(tol)?;
        }
        if let Some(max_iter) = self.max_iter {
            validate_max_iter(max_iter)?;
        }
        Ok(())
    }
}

#[test]
fn test_eigen_settings_defaults() {
    let settings = EigenSettings::<f64>::default();
    assert_eq!(settings.tol, f64::EPSILON);
    assert_eq!(settings.max_iter, 30);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_eigen_settings_validation() {
    assert!(EigenSettingsBuilder::<f64>::default()
        .tol(1e-12)
        .max_iter(50)
        .build()
        .is_ok());

    assert!(EigenSettingsBuilder::<f64>::default().tol(0.).build().is_err());
    assert!(EigenSettingsBuilder::<f64>::default()
        .tol(f64::NAN)
        .build()
        .is_err());
    assert!(EigenSettingsBuilder::<f64>::default()
        .max_iter(0)
        .build()
        .is_err());

    let mut settings = EigenSettings::<f64>::default();
    settings.tol = -1.0;
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("tol"))
    ));
}
