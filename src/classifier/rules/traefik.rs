use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Traefik,
    needles: &["traefik"],
    extract,
    secrets: &[],
};

fn dashboard(facts: &Facts<'_>) -> Option<&'static str> {
    facts
        .env_any(&["TRAEFIK_DASHBOARD", "TRAEFIK_API_DASHBOARD"])
        .filter(|v| v.trim().eq_ignore_ascii_case("true"))
        .map(|_| "Enabled")
}

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .text("Version", facts.env("TRAEFIK_VERSION"))
        .text("Entrypoints", facts.env("TRAEFIK_ENTRYPOINTS"))
        .text("Dashboard", dashboard(facts))
        .list("Ports", &facts.host_ports())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_bound_ports_sorted() {
        let got = extract_with(
            &ENTRY,
            "traefik:v3.1",
            &["TRAEFIK_VERSION=3.1.2", "TRAEFIK_API_DASHBOARD=true"],
            &[("8080/tcp", "8080"), ("443/tcp", "443"), ("80/tcp", "80")],
        );
        assert_eq!(
            got,
            fields(&[
                ("Version", "3.1.2"),
                ("Dashboard", "Enabled"),
                ("Ports", "80, 443, 8080"),
            ])
        );
    }

    #[test]
    fn dashboard_off_is_omitted() {
        let got = extract_with(&ENTRY, "traefik", &["TRAEFIK_DASHBOARD=false"], &[]);
        assert!(got.is_empty());
    }
}
