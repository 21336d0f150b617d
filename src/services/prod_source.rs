use crate::ports::DataSource;

/// Backend bound when `project.mode` is `production`.
#[derive(Debug)]
pub struct ProdSource;

impl DataSource for ProdSource {
    fn get_data(&self) -> String {
        "Prod Data".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datum_is_non_empty() {
        assert!(!ProdSource.get_data().is_empty());
    }
}
