use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::MariaDb,
    needles: &["mariadb"],
    extract,
    secrets: &[],
};

// The official image still honours the MYSQL_* names.
fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env_any(&["MARIADB_VERSION", "MYSQL_VERSION"]))
        .text("User", facts.env_any(&["MARIADB_USER", "MYSQL_USER"]))
        .text(
            "Database",
            facts.env_any(&["MARIADB_DATABASE", "MYSQL_DATABASE"]),
        )
        .number("Port", facts.host_port("3306/tcp"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_mariadb_keys_and_falls_back_to_mysql() {
        let got = extract_with(
            &ENTRY,
            "mariadb:11",
            &["MARIADB_USER=maria", "MYSQL_USER=legacy", "MYSQL_DATABASE=shop"],
            &[("3306/tcp", "3307")],
        );
        assert_eq!(
            got,
            fields(&[("User", "maria"), ("Database", "shop"), ("Port", "3307")])
        );
    }
}
