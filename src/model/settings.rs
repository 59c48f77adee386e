use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy used at load time to choose between the primal and the dualized
/// computational form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DualizePolicy {
    /// Dualize when the model has more than twice as many constraints as variables
    #[default]
    Auto,
    /// Always build the primal form
    Never,
    /// Always build the dual form
    Always,
}

impl DualizePolicy {
    /// Applies the policy to a model with `num_constr` rows and `num_var` columns.
    pub fn dualize(&self, num_constr: usize, num_var: usize) -> bool {
        match self {
            DualizePolicy::Auto => num_constr > 2 * num_var,
            DualizePolicy::Never => false,
            DualizePolicy::Always => true,
        }
    }
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings controlling model preprocessing.
///
/// Construct with [`ModelSettingsBuilder`], or use [`Default`] for the
/// standard configuration.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelSettings {
    ///print the load summary to stdout
    #[builder(default = "false")]
    pub verbose: bool,

    ///enable power-of-two equilibration scaling
    #[builder(default = "true")]
    pub scale: bool,

    ///maximum equilibration scaling rounds
    #[builder(default = "10")]
    pub equilibrate_max_iter: u32,

    ///primal or dual computational form
    #[builder(default = "DualizePolicy::Auto")]
    pub dualize: DualizePolicy,

    ///nonzero count below which a column is never dense
    #[builder(default = "40")]
    pub dense_min_nnz: usize,

    ///growth factor over the preceding column that marks a dense column
    #[builder(default = "10")]
    pub dense_ratio: usize,

    ///dense column classification is discarded above this many columns
    #[builder(default = "1000")]
    pub dense_max_cols: usize,
}

impl Default for ModelSettings {
    fn default() -> ModelSettings {
        ModelSettingsBuilder::default().build().unwrap()
    }
}

impl ModelSettings {
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_dense_ratio(self.dense_ratio)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ModelSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ModelSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl ModelSettingsBuilder {
    /// check that the dense column growth factor is usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(dense_ratio) = self.dense_ratio {
            validate_dense_ratio(dense_ratio)?;
        }
        Ok(())
    }
}

fn validate_dense_ratio(dense_ratio: usize) -> Result<(), SettingsError> {
    // a zero ratio would flag every column after the first
    // nonempty one as dense
    if dense_ratio == 0 {
        return Err(SettingsError::BadFieldValue("dense_ratio"));
    }
    Ok(())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = ModelSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, ModelSettings::default());
    assert!(settings.scale);
    assert_eq!(settings.dualize, DualizePolicy::Auto);

    // fail on zero dense column ratio
    assert!(ModelSettingsBuilder::default()
        .dense_ratio(0)
        .build()
        .is_err());

    // directly construct bad settings and manually check
    let settings = ModelSettings {
        dense_ratio: 0,
        ..ModelSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_dualize_policy() {
    assert!(DualizePolicy::Auto.dualize(5, 2));
    assert!(!DualizePolicy::Auto.dualize(4, 2));
    assert!(!DualizePolicy::Never.dualize(100, 1));
    assert!(DualizePolicy::Always.dualize(0, 3));
}
