use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Vaultwarden,
    needles: &["vaultwarden"],
    extract,
    secrets: &["Admin Token"],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("VAULTWARDEN_VERSION"))
        .text("Admin Token", facts.env("ADMIN_TOKEN"))
        .text("Signups", facts.env("SIGNUPS_ALLOWED"))
        .number("Port", facts.host_port("80/tcp"))
        .build()
}
