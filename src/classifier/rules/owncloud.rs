use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::OwnCloud,
    needles: &["owncloud"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("OWNCLOUD_VERSION"))
        .text("Admin User", facts.env("OWNCLOUD_ADMIN_USERNAME"))
        .text("DB Host", facts.env("OWNCLOUD_DB_HOST"))
        .text("DB Name", facts.env("OWNCLOUD_DB_NAME"))
        .number("Port", facts.host_port("8080/tcp"))
        .build()
}
