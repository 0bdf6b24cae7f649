use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::MySql,
    needles: &["mysql"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("MYSQL_VERSION"))
        .text("User", facts.env("MYSQL_USER"))
        .text("Database", facts.env("MYSQL_DATABASE"))
        .number("Port", facts.host_port("3306/tcp"))
        .build()
}
