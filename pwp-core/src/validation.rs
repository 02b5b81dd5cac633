pub struct Validator;

impl Validator {
    /// World names become file names; reject anything that could escape the
    /// settings directory.
    pub fn validate_world_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("world name must not be empty".to_string());
        }
        if name.trim() != name {
            return Err(format!(
                "world name '{name}' must not start or end with whitespace"
            ));
        }
        if name == "." || name == ".." {
            return Err(format!("'{name}' is not a valid world name"));
        }
        if name.contains(['/', '\\', '\0']) {
            return Err(format!("world name '{name}' must not contain path separators"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Validator;

    #[test]
    fn accepts_plain_world_names() {
        assert!(Validator::validate_world_name("world").is_ok());
        assert!(Validator::validate_world_name("world_nether").is_ok());
        assert!(Validator::validate_world_name("My World").is_ok());
    }

    #[test]
    fn rejects_empty_and_path_like_names() {
        assert!(Validator::validate_world_name("  ").is_err());
        assert!(Validator::validate_world_name("..").is_err());
        assert!(Validator::validate_world_name("a/b").is_err());
        assert!(Validator::validate_world_name("a\\b").is_err());
        assert!(Validator::validate_world_name(" world").is_err());
        assert!(Validator::validate_world_name("world ").is_err());
    }
}
