/// Sorts import paths in descending order, so `a/b/c` is visited before `a/b`.
pub fn descending_keys<'a, I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<String> = keys.into_iter().map(str::to_string).collect();
    keys.sort_unstable_by(|a, b| b.cmp(a));
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path_comes_first() {
        assert_eq!(descending_keys(["a/b", "a/b/c"]), vec!["a/b/c", "a/b"]);
    }

    #[test]
    fn test_byte_order_descending() {
        let keys = descending_keys([
            "github.com/foo/bar",
            "golang.org/x/sys",
            "github.com/foo/bar/v2",
            "github.com/Foo/baz",
        ]);
        assert_eq!(
            keys,
            vec![
                "golang.org/x/sys",
                "github.com/foo/bar/v2",
                "github.com/foo/bar",
                "github.com/Foo/baz",
            ]
        );
    }

    #[test]
    fn test_empty() {
        assert!(descending_keys(std::iter::empty()).is_empty());
    }
}
