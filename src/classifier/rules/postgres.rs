use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::PostgreSql,
    needles: &["postgres"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .number("Port", facts.host_port("5432/tcp"))
        .text("Database", facts.env("POSTGRES_DB"))
        .text("User", facts.env("POSTGRES_USER"))
        .text("SSL Mode", facts.env("POSTGRES_SSL_MODE"))
        .number("Max Conn", facts.env_number("POSTGRES_MAX_CONNECTIONS"))
        .text("Data Dir", facts.env("PGDATA"))
        .build()
}
