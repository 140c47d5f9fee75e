use axum::response::Html;

/// Every public endpoint, in the order the sitemap lists them.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("GET", "/metrics"),
    ("GET", "/docs"),
    ("GET", "/users"),
    ("POST", "/users"),
    ("GET", "/users/:id"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/:id"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/:id"),
    ("GET", "/user/favorites/:user_id"),
    ("POST", "/favorites/planets/:planet_id/:user_id"),
    ("DELETE", "/favorites/planets/:planet_id/:user_id"),
    ("POST", "/favorites/people/:people_id/:user_id"),
    ("DELETE", "/favorites/people/:people_id/:user_id"),
];

/// Parameterless GET endpoints become links; the rest are listed as text.
pub fn render() -> String {
    let items: String = ENDPOINTS
        .iter()
        .map(|(method, path)| {
            if *method == "GET" && !path.contains(':') {
                format!("<li><a href=\"{path}\">{method} {path}</a></li>")
            } else {
                format!("<li>{method} {path}</li>")
            }
        })
        .collect();
    format!(
        "<div style=\"text-align: center;\"><h1>Star Wars Blog API</h1>\
         <p>Available endpoints:</p><ul style=\"text-align: left;\">{items}</ul></div>"
    )
}

pub async fn sitemap() -> Html<String> {
    Html(render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_only_plain_get_routes() {
        let html = render();
        assert!(html.contains("<a href=\"/users\">GET /users</a>"));
        assert!(html.contains("<li>GET /users/:id</li>"));
        assert!(html.contains("<li>DELETE /favorites/people/:people_id/:user_id</li>"));
    }
}
