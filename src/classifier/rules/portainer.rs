use super::prelude::*;

pub(crate) const ENTRY: ClassifierEntry = ClassifierEntry {
    kind: ContainerKind::Portainer,
    needles: &["portainer"],
    extract,
    secrets: &[],
};

// HTTPS listener first; older installs only expose 9000.
const UI_PORTS: &[&str] = &["9443/tcp", "9000/tcp"];

// Anything that is not the Business image is the Community edition.
fn edition(image_lower: &str) -> &'static str {
    if image_lower.contains("portainer-ee") {
        "Business"
    } else {
        "Community"
    }
}

fn extract(facts: &Facts<'_>) -> DetailFields {
    DetailsBuilder::new()
        .number("Port", facts.host_port_any(UI_PORTS))
        .text("Edition", Some(edition(&facts.image_lower())))
        .text("Admin", facts.env("PORTAINER_ADMIN_USER"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_edition_from_image() {
        let got = extract_with(
            &ENTRY,
            "portainer/portainer-ee:2.21",
            &[],
            &[("9443/tcp", "9443"), ("8000/tcp", "8000")],
        );
        assert_eq!(got, fields(&[("Port", "9443"), ("Edition", "Business")]));
    }

    #[test]
    fn falls_back_to_legacy_port() {
        let got = extract_with(
            &ENTRY,
            "portainer/portainer-ce",
            &["PORTAINER_ADMIN_USER=admin"],
            &[("9000/tcp", "19000")],
        );
        assert_eq!(
            got,
            fields(&[("Port", "19000"), ("Edition", "Community"), ("Admin", "admin")])
        );
    }

    #[test]
    fn unsuffixed_image_is_community() {
        assert_eq!(
            extract_with(&ENTRY, "portainer/portainer", &[], &[]),
            fields(&[("Edition", "Community")])
        );
    }
}
