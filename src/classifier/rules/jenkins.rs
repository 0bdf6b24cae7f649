use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Jenkins,
    needles: &["jenkins"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("JENKINS_VERSION"))
        .text("Admin User", facts.env("JENKINS_ADMIN_ID"))
        .number("Port", facts.host_port("8080/tcp"))
        .number("Agent Port", facts.host_port("50000/tcp"))
        .build()
}
