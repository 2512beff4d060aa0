//! Property-based tests for repository listing parsing and labels.

#[cfg(test)]
mod proptest_tests {
    use crate::repository::{parse_listing, RepositoryDescriptor, RepositoryId};
    use proptest::prelude::*;

    fn descriptor() -> impl Strategy<Value = RepositoryDescriptor> {
        (
            "[A-Za-z0-9][A-Za-z0-9._-]{0,30}",
            proptest::option::of(".{0,40}"),
        )
            .prop_map(|(name, description)| RepositoryDescriptor { name, description })
    }

    fn to_line(repo: &RepositoryDescriptor) -> String {
        serde_json::json!({ "name": repo.name, "description": repo.description }).to_string()
    }

    proptest! {
        /// Property: every well-formed line yields exactly its descriptor, in order
        #[test]
        fn parse_listing_recovers_every_line(repos in proptest::collection::vec(descriptor(), 0..20)) {
            let output: String = repos.iter().map(|r| to_line(r) + "\n").collect();
            let parsed = parse_listing(&output).unwrap();
            prop_assert_eq!(parsed, repos);
        }

        /// Property: blank lines between entries never change the result
        #[test]
        fn parse_listing_ignores_blank_lines(
            repos in proptest::collection::vec(descriptor(), 1..10),
            padding in 0usize..4,
        ) {
            let blank = "\n".repeat(padding);
            let output: String = repos.iter().map(|r| format!("{}{}\n", blank, to_line(r))).collect();
            let parsed = parse_listing(&output).unwrap();
            prop_assert_eq!(parsed.len(), repos.len());
        }

        /// Property: a label always starts with the repository name
        #[test]
        fn label_starts_with_name(repo in descriptor()) {
            prop_assert!(repo.label().starts_with(&repo.name));
        }

        /// Property: no description or a blank one means the label is just the name
        #[test]
        fn label_without_description_is_name(name in "[a-z][a-z0-9-]{0,20}", blank in "[ \t]{0,5}") {
            let none = RepositoryDescriptor { name: name.clone(), description: None };
            let empty = RepositoryDescriptor { name: name.clone(), description: Some(blank) };
            prop_assert_eq!(none.label(), name.clone());
            prop_assert_eq!(empty.label(), name);
        }

        /// Property: SSH clone URLs always embed org and name in git's scp-like form
        #[test]
        fn ssh_url_shape(org in "[A-Za-z0-9-]{1,20}", name in "[A-Za-z0-9._-]{1,30}") {
            let url = RepositoryId::new(org.clone(), name.clone()).ssh_url("github.com");
            prop_assert_eq!(url, format!("git@github.com:{}/{}.git", org, name));
        }
    }
}
