use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Nextcloud,
    needles: &["nextcloud"],
    extract,
    secrets: &[],
};

/// Database settings come from whichever backend the container was configured for.
fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("NEXTCLOUD_VERSION"))
        .text("Admin User", facts.env("NEXTCLOUD_ADMIN_USER"))
        .text("DB Host", facts.env_any(&["MYSQL_HOST", "POSTGRES_HOST"]))
        .text("DB Name", facts.env_any(&["MYSQL_DATABASE", "POSTGRES_DB"]))
        .number("Port", facts.host_port("80/tcp"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_backed_install() {
        let got = extract_with(
            &ENTRY,
            "nextcloud:29-apache",
            &["POSTGRES_HOST=db", "POSTGRES_DB=nextcloud", "NEXTCLOUD_ADMIN_USER=root"],
            &[("80/tcp", "8081")],
        );
        assert_eq!(
            got,
            fields(&[
                ("Admin User", "root"),
                ("DB Host", "db"),
                ("DB Name", "nextcloud"),
                ("Port", "8081"),
            ])
        );
    }
}
