mod input_type_registry_tests;
mod operation_extractor_tests;

use crate::ast;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::DocumentFile;

pub(super) const TODO_SCHEMA: &str = r#"
type Query {
  todo(id: ID!): Todo
  todos: [Todo!]!
  search(term: String!): [SearchResult]
  tags: [[String!]]
  now: DateTime!
  node: Node
}

type Mutation {
  createTodo(input: CreateTodoInput!): Todo!
}

interface Node {
  id: ID!
}

type Todo {
  id: ID!
  title: String!
  done: Boolean
  status: Status!
  owner: User
  score: Float
}

type User {
  id: ID!
  name: String
}

union SearchResult = Todo | User

enum Status {
  OPEN
  IN_PROGRESS
  DONE
}

scalar DateTime

input CreateTodoInput {
  title: String!
  status: Status
  tags: [String!]
  parent: TodoRef
  filter: TodoFilter
}

input TodoRef {
  id: ID!
}

input TodoFilter {
  and: [TodoFilter!]
  or: [TodoFilter!]
  title: String
}
"#;

pub(super) fn build_schema(schema_src: &str) -> Schema {
    SchemaBuilder::from_str(None, schema_src)
        .expect("schema failed to load")
        .build()
        .expect("schema failed to build")
}

pub(super) fn todo_schema() -> Schema {
    build_schema(TODO_SCHEMA)
}

pub(super) fn document(file_name: &str, doc_src: &str) -> DocumentFile {
    DocumentFile::parse(file_name, doc_src).expect("document failed to parse")
}

/// Parses `type_src` as the type of a variable.
pub(super) fn parse_type(type_src: &str) -> ast::operation::Type {
    use graphql_parser::query::Definition;
    use graphql_parser::query::OperationDefinition;

    let doc = ast::operation::parse(format!("query Q($v: {type_src}) {{ x }}").as_str())
        .expect("parse error");
    match doc.definitions.into_iter().next() {
        Some(Definition::Operation(OperationDefinition::Query(query))) =>
            query.variable_definitions.into_iter().next()
                .expect("no variable definition")
                .var_type,
        other => panic!("unexpected definition: {other:?}"),
    }
}
