/// Entry points the host binds by name.
pub const REQUIRED: [&str; 2] = ["vertex_main", "fragment_main"];

/// Fails on the first required entry point missing from `found`.
pub fn check(found: &[String]) -> Result<(), String> {
    match REQUIRED
        .iter()
        .find(|entry| !found.iter().any(|name| name == *entry))
    {
        Some(entry) => Err(format!("shader module has no `{entry}` entry point")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn both_stages_present() {
        assert_eq!(check(&names(&["fragment_main", "vertex_main"])), Ok(()));
    }

    #[test]
    fn extra_entry_points_are_fine() {
        assert_eq!(check(&names(&["vertex_main", "fragment_main", "debug_main"])), Ok(()));
    }

    #[test]
    fn missing_fragment_stage_fails() {
        let err = check(&names(&["vertex_main"])).unwrap_err();
        assert!(err.contains("`fragment_main`"), "{err}");
    }

    #[test]
    fn empty_module_fails_on_vertex_first() {
        let err = check(&[]).unwrap_err();
        assert!(err.contains("`vertex_main`"), "{err}");
    }
}
