
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::DocumentFile;

pub(super) const SCHEMA: &str = r#"
type Query {
  todo(id: ID!): Todo
  search(term: String!): [SearchResult]
}

type Mutation {
  createTodo(input: CreateTodoInput!): Todo!
}

type Subscription {
  todoAdded: Todo!
}

type Todo {
  id: ID!
  title: String!
}

type User {
  name: String
}

union SearchResult = Todo | User

input CreateTodoInput {
  title: String!
  tags: [String!]
}
"#;

pub(super) fn schema() -> Schema {
    SchemaBuilder::from_str(None, SCHEMA)
        .expect("schema failed to load")
        .build()
        .expect("schema failed to build")
}

pub(super) fn document(file_name: &str, doc_src: &str) -> DocumentFile {
    DocumentFile::parse(file_name, doc_src).expect("document failed to parse")
}
