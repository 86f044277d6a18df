use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
    pub method: &'static str,
}

impl Link {
    fn get(rel: &'static str, href: String) -> Self {
        Link {
            rel,
            href,
            method: "GET",
        }
    }
}

/// Builds every hyperlink in the API from the configured public base URL.
/// Pure: same inputs, same links; handlers receive it as app data instead of
/// reaching into the request context.
#[derive(Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `self` always; `next` only while pages remain; `prev` from page 2 on.
    /// A page size of zero means zero total pages, so no `next` ever.
    pub fn page_links(&self, path: &str, page: u64, page_size: u64, total: u64) -> Vec<Link> {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };

        let mut links = vec![Link::get("self", self.page_href(path, page, page_size))];
        if page < total_pages {
            links.push(Link::get("next", self.page_href(path, page + 1, page_size)));
        }
        if page > 1 {
            links.push(Link::get("prev", self.page_href(path, page - 1, page_size)));
        }
        links
    }

    fn page_href(&self, path: &str, page: u64, page_size: u64) -> String {
        format!(
            "{}{}?page={}&pageSize={}",
            self.base, path, page, page_size
        )
    }

    pub fn manager_links(&self, id: Uuid) -> Vec<Link> {
        vec![
            Link::get("self", format!("{}/api/v1/managers/{}", self.base, id)),
            Link::get(
                "teams",
                format!("{}/api/v1/teams?managerId={}", self.base, id),
            ),
        ]
    }

    pub fn employee_links(&self, id: Uuid, team_id: Option<Uuid>) -> Vec<Link> {
        let mut links = vec![Link::get(
            "self",
            format!("{}/api/v1/employees/{}", self.base, id),
        )];
        if let Some(team_id) = team_id {
            links.push(Link::get(
                "team",
                format!("{}/api/v1/teams/{}", self.base, team_id),
            ));
        }
        links
    }

    pub fn team_links(&self, id: Uuid) -> Vec<Link> {
        vec![
            Link::get("self", format!("{}/api/v1/teams/{}", self.base, id)),
            Link::get(
                "employees",
                format!("{}/api/v1/employees?teamId={}", self.base, id),
            ),
        ]
    }
}
