#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("pattern {pattern:?} compiles to the same expression as existing pattern {existing:?}")]
    Conflict { pattern: String, existing: String },

    #[error("invalid expression in pattern {pattern:?}{}", describe_parameter(.parameter))]
    Configuration {
        pattern: String,
        parameter: Option<String>,
        #[source]
        source: regex::Error,
    },
}

impl RouterError {
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Conflict { .. } => true,
            Self::Configuration { .. } => false,
        }
    }
}

fn describe_parameter(parameter: &Option<String>) -> String {
    match parameter {
        Some(name) => format!(" for parameter {:?}", name),
        None => String::new(),
    }
}
