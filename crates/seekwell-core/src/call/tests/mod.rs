
use crate::{
    call::{Action, CallName, Keyword, Segment, resolve},
    config::ResolverConfig,
    error::ResolveError,
    spec::{Clause, Connector, Operator, OrderDirection},
    value::Value,
};

fn field(name: &str) -> Segment {
    Segment::Field(name.to_string())
}

fn keyword(keyword: Keyword) -> Segment {
    Segment::Keyword(keyword)
}

///
/// Scanner
///

#[test]
fn recognizes_both_action_prefixes() {
    assert_eq!(
        CallName::parse("findByName").unwrap().action(),
        Action::FindOne
    );
    assert_eq!(
        CallName::parse("findAllByName").unwrap().action(),
        Action::FindAll
    );
}

#[test]
fn rejects_names_without_an_action_prefix() {
    for name in ["removeByName", "find", "ByName", ""] {
        assert_eq!(
            CallName::parse(name),
            Err(ResolveError::InvalidCallName {
                name: name.to_string()
            }),
            "{name:?} should not parse",
        );
    }
}

#[test]
fn fields_are_normalized_to_snake_case() {
    let call = CallName::parse("findByTypeIdAndCreatedAt").unwrap();

    assert_eq!(
        call.segments(),
        &[
            field("type_id"),
            keyword(Keyword::And),
            field("created_at"),
        ]
    );
}

#[test]
fn longer_keywords_win_over_their_prefixes() {
    let call = CallName::parse("findAllByTypeOrderByDescName").unwrap();
    assert_eq!(
        call.segments(),
        &[field("type"), keyword(Keyword::OrderByDesc), field("name")]
    );

    let call = CallName::parse("findAllByStatusOrNotInTags").unwrap();
    assert_eq!(
        call.segments(),
        &[field("status"), keyword(Keyword::OrNotIn), field("tags")]
    );
}

#[test]
fn implicit_leading_connector_is_reconciled_for_bare_fields() {
    let call = CallName::parse("findByName").unwrap();

    // The segment list stays as tokenized; the reconciled keyword list
    // gains the assumed leading And.
    assert_eq!(call.segments(), &[field("name")]);
    assert_eq!(call.reconciled_keywords(), vec![Keyword::And]);
}

#[test]
fn aligned_keyword_counts_are_not_reconciled() {
    let call = CallName::parse("findAllByIdIn").unwrap();

    assert_eq!(call.reconciled_keywords(), vec![Keyword::In]);
}

#[test]
fn trailing_markers_do_not_count_as_field_takers() {
    let call = CallName::parse("findAllByTypeOrderByNameLimitPaginatedWith").unwrap();

    assert_eq!(
        call.reconciled_keywords(),
        vec![
            Keyword::And,
            Keyword::OrderBy,
            Keyword::Limit,
            Keyword::Paginated,
            Keyword::With,
        ]
    );
}

#[test]
fn rendered_names_retokenize_to_the_same_segments() {
    let first = CallName::parse("findAllByTypeIdOrFlagOrderByNameLimit").unwrap();
    let second = CallName::parse(&first.render()).unwrap();

    assert_eq!(first.action(), second.action());
    assert_eq!(first.segments(), second.segments());
}

///
/// Binder
///

fn config() -> ResolverConfig {
    ResolverConfig::default()
}

#[test]
fn single_field_binds_one_equality_clause() {
    let resolved = resolve("findByName", vec![Value::from("x")], &config()).unwrap();

    assert_eq!(resolved.action, Action::FindOne);
    assert_eq!(
        resolved.spec.clauses,
        vec![Clause::compare(
            Connector::And,
            "name",
            Operator::Eq,
            Value::from("x"),
        )]
    );
    assert!(resolved.spec.order.is_empty());
    assert_eq!(resolved.spec.limit, None);
}

#[test]
fn connected_fields_bind_in_argument_order() {
    let resolved = resolve(
        "findByNameAndDescription",
        vec![Value::from("x"), Value::from("y")],
        &config(),
    )
    .unwrap();

    assert_eq!(
        resolved.spec.clauses,
        vec![
            Clause::compare(Connector::And, "name", Operator::Eq, Value::from("x")),
            Clause::compare(Connector::And, "description", Operator::Eq, Value::from("y")),
        ]
    );
}

#[test]
fn ordering_and_explicit_limit_are_bound() {
    let resolved = resolve(
        "findAllByTypeOrderByNameLimit",
        vec![Value::from("t"), Value::from(20)],
        &config(),
    )
    .unwrap();

    assert_eq!(resolved.action, Action::FindAll);
    assert_eq!(
        resolved.spec.clauses,
        vec![Clause::compare(
            Connector::And,
            "type",
            Operator::Eq,
            Value::from("t"),
        )]
    );
    assert_eq!(
        resolved.spec.order,
        vec![("name".to_string(), OrderDirection::Asc)]
    );
    assert_eq!(resolved.spec.limit, Some(20));
}

#[test]
fn omitted_limit_argument_falls_back_to_the_configured_default() {
    // Both arguments are consumed by the two connected fields, so the
    // trailing Limit marker finds nothing and substitutes the default.
    let resolved = resolve(
        "findAllByTypeOrFlagOrderByNameLimit",
        vec![Value::from("t"), Value::from(1)],
        &config(),
    )
    .unwrap();

    assert_eq!(
        resolved.spec.clauses,
        vec![
            Clause::compare(Connector::And, "type", Operator::Eq, Value::from("t")),
            Clause::compare(Connector::Or, "flag", Operator::Eq, Value::from(1)),
        ]
    );
    assert_eq!(resolved.spec.limit, Some(ResolverConfig::DEFAULT_LIMIT));
}

#[test]
fn missing_required_argument_fails_before_anything_else() {
    let result = resolve("findAllByType", vec![], &config());

    assert_eq!(
        result,
        Err(ResolveError::MissingArgument {
            field: "type".to_string()
        })
    );
}

#[test]
fn membership_keyword_binds_a_candidate_list() {
    let resolved = resolve(
        "findAllByIdIn",
        vec![Value::from(vec![1, 2, 3])],
        &config(),
    )
    .unwrap();

    assert_eq!(
        resolved.spec.clauses,
        vec![Clause::membership(
            Connector::And,
            "id",
            vec![Value::Int(1), Value::Int(2), Value::Int(3)],
            false,
        )]
    );
}

#[test]
fn membership_argument_must_be_a_list() {
    let result = resolve("findAllByIdIn", vec![Value::from(1)], &config());

    assert_eq!(
        result,
        Err(ResolveError::InvalidArgument {
            context: "id".to_string(),
            expected: "a list of candidate values",
        })
    );
}

#[test]
fn range_keyword_binds_two_bounds() {
    let resolved = resolve(
        "findAllByAgeBetween",
        vec![Value::from(vec![18, 65])],
        &config(),
    )
    .unwrap();

    assert_eq!(
        resolved.spec.clauses,
        vec![Clause::range(
            Connector::And,
            "age",
            Value::Int(18),
            Value::Int(65),
            false,
        )]
    );
}

#[test]
fn range_bounds_must_be_a_pair() {
    let result = resolve(
        "findAllByAgeBetween",
        vec![Value::from(vec![18])],
        &config(),
    );

    assert_eq!(
        result,
        Err(ResolveError::InvalidArgument {
            context: "age".to_string(),
            expected: "a two-element list of range bounds",
        })
    );
}

#[test]
fn paginated_marker_defaults_to_the_configured_page_size() {
    let resolved = resolve("findAllByTypePaginated", vec![Value::from("t")], &config()).unwrap();

    assert_eq!(resolved.spec.page, Some(ResolverConfig::DEFAULT_PER_PAGE));
}

#[test]
fn non_numeric_limit_argument_is_rejected() {
    let result = resolve(
        "findAllByTypeLimit",
        vec![Value::from("t"), Value::from("many")],
        &config(),
    );

    assert_eq!(
        result,
        Err(ResolveError::InvalidArgument {
            context: "limit".to_string(),
            expected: "a positive integer",
        })
    );
}

#[test]
fn with_marker_takes_an_explicit_relation_list() {
    let resolved = resolve(
        "findByIdWith",
        vec![Value::from(1), Value::from(vec!["tags", "owner"])],
        &config(),
    )
    .unwrap();

    assert_eq!(
        resolved.spec.eager_load,
        Some(vec!["tags".to_string(), "owner".to_string()])
    );
}

#[test]
fn with_marker_falls_back_to_configured_relations() {
    let config = ResolverConfig {
        relations: vec!["tags".to_string()],
        ..ResolverConfig::default()
    };

    let resolved = resolve("findByIdWith", vec![Value::from(1)], &config).unwrap();
    assert_eq!(resolved.spec.eager_load, Some(vec!["tags".to_string()]));

    // No configured relations: the marker applies nothing.
    let resolved = resolve("findByIdWith", vec![Value::from(1)], &ResolverConfig::default()).unwrap();
    assert_eq!(resolved.spec.eager_load, None);
}

#[test]
fn dangling_connective_is_an_invalid_call_name() {
    let result = resolve(
        "findByNameAndOr",
        vec![Value::from("x"), Value::from("y")],
        &config(),
    );

    assert_eq!(
        result,
        Err(ResolveError::InvalidCallName {
            name: "findByNameAndOr".to_string()
        })
    );
}
