//! End-to-end mapping tests over a small blog domain


use automap_core::mapping::OptionsSpec;
use automap_core::naming::CaseConvention;
use automap_core::{
    AutoMapper, ClassDescriptor, Configuration, Error, Object, Params, PropertyType, Value,
};
use test_support::{author, blog_classes, blog_mapper, post, string_property};

#[test]
fn test_post_maps_to_dto_with_nested_values() {
    let mapper = blog_mapper();

    let dto = mapper.map(&post(10, "Hello", 2), "PostDto").unwrap();

    assert_eq!(dto.class(), "PostDto");
    assert_eq!(dto.get("id"), Some(&Value::I64(10)));
    assert_eq!(string_property(&dto, "title"), "Hello");
    assert_eq!(dto.get("commentCount"), Some(&Value::I64(2)));
    assert!(!dto.has("body"));

    let author = dto.get("author").and_then(Value::as_object).unwrap();
    assert_eq!(author.class(), "AuthorDto");
    assert_eq!(string_property(author, "displayName"), "Ada");

    let comments = dto.get("comments").and_then(Value::as_list).unwrap();
    assert_eq!(comments.len(), 2);
    let first = comments[0].as_object().unwrap();
    assert_eq!(first.class(), "CommentDto");
    assert_eq!(string_property(first, "text"), "comment 0");
}

#[test]
fn test_params_reach_nested_mappings() {
    let mapper = blog_mapper();
    let mut params = Params::new();
    params.insert("post_title".to_string(), Value::from("Hello"));

    let dto = mapper
        .map_with_context(&post(1, "Hello", 1), "PostDto", &params)
        .unwrap();

    let comments = dto.get("comments").and_then(Value::as_list).unwrap();
    let comment = comments[0].as_object().unwrap();
    assert_eq!(string_property(comment, "postTitle"), "Hello");
}

#[test]
fn test_post_without_comments_gets_empty_list() {
    let mapper = blog_mapper();
    let source = post(1, "Quiet", 0).with("comments", Value::Null);

    let dto = mapper.map(&source, "PostDto").unwrap();
    assert_eq!(dto.get("comments"), Some(&Value::List(Vec::new())));
    assert_eq!(dto.get("commentCount"), Some(&Value::I64(0)));
}

#[test]
fn test_map_multiple_posts() {
    let mapper = blog_mapper();
    let posts: Vec<Object> = (1..=5).map(|id| post(id, &format!("Post {}", id), 1)).collect();

    let dtos = mapper.map_multiple(&posts, "PostDto").unwrap();
    let titles: Vec<&str> = dtos.iter().map(|dto| string_property(dto, "title")).collect();
    assert_eq!(titles, vec!["Post 1", "Post 2", "Post 3", "Post 4", "Post 5"]);
}

#[test]
fn test_map_multiple_reports_first_failure() {
    let mapper = blog_mapper();
    let broken = post(2, "Broken", 1).with("title", 12i64);
    let posts = vec![post(1, "Fine", 1), broken, post(3, "Never mapped", 1)];

    let err = mapper.map_multiple(&posts, "PostDto").unwrap_err();
    assert!(matches!(
        err,
        Error::UnableToMap { ref property, .. } if property == "title"
    ));
}

#[test]
fn test_interface_mapping_serves_every_entity() {
    let mapper = AutoMapper::initialize(|config| {
        blog_classes(config);
        config.register_class(
            ClassDescriptor::new("Reference")
                .property("id", PropertyType::Int)
                .property("kind", PropertyType::String),
        );
        config
            .register_mapping("Identifiable", "Reference")
            .map_from("kind", |source, _| Ok(Value::from(source.class())));
    });

    let from_author = mapper.map(&author(4, "Grace"), "Reference").unwrap();
    let from_post = mapper.map(&post(9, "Hi", 0), "Reference").unwrap();

    assert_eq!(string_property(&from_author, "kind"), "Author");
    assert_eq!(from_author.get("id"), Some(&Value::I64(4)));
    assert_eq!(string_property(&from_post, "kind"), "Post");
    assert_eq!(from_post.get("id"), Some(&Value::I64(9)));
}

#[test]
fn test_reverse_mapping_round_trip() {
    let mapper = AutoMapper::initialize(|config| {
        blog_classes(config);
        config
            .register_mapping("Author", "AuthorDto")
            .with_naming_conventions(CaseConvention::SnakeCase, CaseConvention::CamelCase)
            .reverse_map();
    });

    let dto = mapper.map(&author(3, "Edsger"), "AuthorDto").unwrap();
    let entity = mapper.map(&dto, "Author").unwrap();

    assert_eq!(entity.get("id"), Some(&Value::I64(3)));
    assert_eq!(string_property(&entity, "display_name"), "Edsger");
    // the DTO never carried the email
    assert_eq!(entity.get("email"), Some(&Value::Null));
}

#[test]
fn test_abstract_destination_is_rejected() {
    let mapper = AutoMapper::initialize(|config| {
        blog_classes(config);
        config.register_mapping("AuthorDto", "Entity");
    });

    let dto = Object::new("AuthorDto").with("id", 1i64);
    let err = mapper.map(&dto, "Entity").unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_configuration_from_options_spec() {
    let spec = OptionsSpec::from_json(
        r#"{
            "source_naming_convention": "snake_case",
            "destination_naming_convention": "camel_case",
            "create_unregistered_mappings": true
        }"#,
    )
    .unwrap();

    let mut config = Configuration::from_spec(&spec);
    blog_classes(&mut config);
    let mapper = AutoMapper::new(config);

    let dto = mapper.map(&author(5, "Barbara"), "AuthorDto").unwrap();
    assert_eq!(string_property(&dto, "displayName"), "Barbara");
}

#[test]
fn test_options_spec_rejects_unknown_fields() {
    let err = OptionsSpec::from_json(r#"{"skip_constructors": true}"#).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_map_onto_existing_dto() {
    let mapper = blog_mapper();
    let mut dto = Object::new("AuthorDto").with("displayName", "old");

    mapper.map_onto(&author(8, "Frances"), &mut dto).unwrap();
    assert_eq!(string_property(&dto, "displayName"), "Frances");
    assert_eq!(dto.get("id"), Some(&Value::I64(8)));
}
