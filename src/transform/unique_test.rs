//! Scenario tests for recursive unique.

#[cfg(test)]
mod tests {
    use crate::depth::Depth;
    use crate::error::Error;
    use crate::testing::container;
    use crate::transform::{unique, UniqueOptions};
    use crate::value::{Container, Handle, Value};
    use pretty_assertions::assert_eq;

    fn run(input: &str, depth: Depth, options: UniqueOptions) -> Container {
        unique(&container(input), depth, &options)
            .unwrap_or_else(|e| panic!("unique {input} failed: {e}"))
    }

    #[test]
    fn test_recurses_into_children() {
        let out = run(
            r#"{"a":[1,1,2],"b":{"x":"v","y":"v"},"c":3}"#,
            Depth::unlimited(),
            UniqueOptions::new(),
        );
        assert_eq!(out, container(r#"{"a":[1,2],"b":{"x":"v"},"c":3}"#));
    }

    #[test]
    fn test_depth_zero_leaves_children() {
        let out = run(r#"[[1,1],1,1,[1,1]]"#, Depth::levels(0), UniqueOptions::new());
        assert_eq!(out, container(r#"[[1,1],1,[1,1]]"#));
    }

    #[test]
    fn test_depth_one() {
        let out = run(r#"[[[2,2],2,2]]"#, Depth::levels(1), UniqueOptions::new());
        assert_eq!(out, container(r#"[[[2,2],2]]"#));
    }

    #[test]
    fn test_containers_are_not_deduplicated_by_default() {
        let out = run(r#"[[1],[1],{"a":1},{"a":1}]"#, Depth::unlimited(), UniqueOptions::new());
        assert_eq!(out, container(r#"[[1],[1],{"a":1},{"a":1}]"#));
    }

    #[test]
    fn test_containers_as_values() {
        let opts = UniqueOptions::new().with_containers_as_values(true);
        let out = run(r#"[[1],[1],{"a":1},{"a":1},[1.0]]"#, Depth::unlimited(), opts);
        assert_eq!(out, container(r#"[[1],{"a":1},[1.0]]"#));
    }

    #[test]
    fn test_containers_compared_after_their_own_dedupe() {
        let opts = UniqueOptions::new().with_containers_as_values(true);
        let out = run(r#"[[1,1],[1]]"#, Depth::unlimited(), opts);
        assert_eq!(out, container(r#"[[1]]"#));
    }

    #[test]
    fn test_skip_lists_still_recurses() {
        let opts = UniqueOptions::new().with_skip_lists(true);
        let out = run(r#"[1,1,{"a":2,"b":2,"c":[3,3]}]"#, Depth::unlimited(), opts);
        assert_eq!(out, container(r#"[1,1,{"a":2,"c":[3,3]}]"#));
    }

    #[test]
    fn test_skip_maps_still_recurses() {
        let opts = UniqueOptions::new().with_skip_maps(true);
        let out = run(r#"{"a":1,"b":1,"c":[3,3]}"#, Depth::unlimited(), opts);
        assert_eq!(out, container(r#"{"a":1,"b":1,"c":[3]}"#));
    }

    #[test]
    fn test_handles_dedupe_by_identity() {
        let input = Container::list([
            Value::Handle(Handle::object(1)),
            Value::Handle(Handle::object(1)),
            Value::Handle(Handle::resource(1)),
            Value::Handle(Handle::object(2)),
        ]);
        let out = unique(&input, Depth::unlimited(), &UniqueOptions::new()).unwrap();
        assert_eq!(
            out,
            Container::list([
                Value::Handle(Handle::object(1)),
                Value::Handle(Handle::resource(1)),
                Value::Handle(Handle::object(2)),
            ])
        );
    }

    #[test]
    fn test_signed_zeros_and_nans_collapse() {
        let input = Container::list([
            Value::Float(0.0),
            Value::Float(-0.0),
            Value::Float(f64::NAN),
            Value::Float(-f64::NAN),
            Value::Int(0),
        ]);
        let out = unique(&input, Depth::unlimited(), &UniqueOptions::new()).unwrap();
        assert_eq!(
            out,
            Container::list([Value::Float(0.0), Value::Float(f64::NAN), Value::Int(0)])
        );
    }

    #[test]
    fn test_closed_resource_fails() {
        let nested = Container::list([Value::Handle(Handle::closed_resource(5))]);
        let input = Container::list([Value::Int(1), Value::Container(nested)]);
        assert_eq!(
            unique(&input, Depth::unlimited(), &UniqueOptions::new()),
            Err(Error::unsupported_value_type("resource (closed)"))
        );
    }

    #[test]
    fn test_idempotent_on_sample() {
        let opts = UniqueOptions::new().with_preserve_keys(true);
        let input = container(r#"[1,[2,2,"2"],1,{"k":[1,1]},"1"]"#);
        let once = unique(&input, Depth::unlimited(), &opts).unwrap();
        let twice = unique(&once, Depth::unlimited(), &opts).unwrap();
        assert_eq!(once, twice);
    }
}
