use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::WordPress,
    needles: &["wordpress"],
    extract,
    secrets: &[],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("WORDPRESS_VERSION"))
        .text("DB Host", facts.env("WORDPRESS_DB_HOST"))
        .text("DB Name", facts.env("WORDPRESS_DB_NAME"))
        .number("Port", facts.host_port("80/tcp"))
        .build()
}
