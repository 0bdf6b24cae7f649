use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::RabbitMq,
    needles: &["rabbitmq"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("RABBITMQ_VERSION"))
        .text("User", facts.env("RABBITMQ_DEFAULT_USER"))
        .number("Port", facts.host_port("5672/tcp"))
        .number("Management Port", facts.host_port("15672/tcp"))
        .build()
}
