use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Minio,
    needles: &["minio"],
    extract,
    secrets: &["Secret Key"],
};

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Access Key", facts.env("MINIO_ROOT_USER"))
        .text("Secret Key", facts.env("MINIO_ROOT_PASSWORD"))
        .number("API Port", facts.host_port("9000/tcp"))
        .number("Console Port", facts.host_port("9001/tcp"))
        .build()
}
