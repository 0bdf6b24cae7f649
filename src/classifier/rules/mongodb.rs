use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::MongoDb,
    needles: &["mongo"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Database", facts.env("MONGO_INITDB_DATABASE"))
        .text("Root User", facts.env("MONGO_INITDB_ROOT_USERNAME"))
        .number("Port", facts.host_port("27017/tcp"))
        .build()
}
