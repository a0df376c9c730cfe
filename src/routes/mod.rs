use crate::error::AppError;
use std::collections::HashMap;

const MAX_REDIRECTS: usize = 8;

/// One node of the page route table. Top-level paths are absolute, child
/// paths are relative to their parent. Segments starting with ':' capture
/// the matched path segment as a named parameter.
#[derive(Debug, Clone)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub component: Option<&'static str>,
    pub redirect: Option<&'static str>,
    pub children: Vec<RouteDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub component: &'static str,
    pub name: Option<&'static str>,
    pub params: HashMap<String, String>,
}

/// The application's page table: a documents section with a list view and a
/// per-document detail view, plus a playground page.
pub fn route_table() -> Vec<RouteDef> {
    vec![
        RouteDef {
            path: "/",
            name: None,
            component: None,
            redirect: Some("/docs"),
            children: vec![],
        },
        RouteDef {
            path: "/docs",
            name: None,
            component: Some("DocumentsPage"),
            redirect: Some("/docs/list"),
            children: vec![
                RouteDef {
                    path: "list",
                    name: None,
                    component: Some("DocumentList"),
                    redirect: None,
                    children: vec![],
                },
                RouteDef {
                    path: ":id",
                    name: Some("doc-detail"),
                    component: Some("DocumentDetail"),
                    redirect: None,
                    children: vec![],
                },
            ],
        },
        RouteDef {
            path: "/playground",
            name: None,
            component: Some("Playground"),
            redirect: None,
            children: vec![],
        },
    ]
}

/// Static table lookup: normalize the path, follow redirects, and return the
/// matched component with any captured parameters.
pub fn resolve(table: &[RouteDef], path: &str) -> Result<RouteMatch, AppError> {
    let mut target = normalize(path);

    for _ in 0..MAX_REDIRECTS {
        match lookup(table, &target) {
            Some(Lookup::Redirect(to)) => target = normalize(&to),
            Some(Lookup::Match(hit)) => return Ok(hit),
            None => break,
        }
    }

    Err(AppError::RouteNotFound(path.to_string()))
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

enum Lookup {
    Redirect(String),
    Match(RouteMatch),
}

fn lookup(table: &[RouteDef], path: &str) -> Option<Lookup> {
    let segs = segments(path);
    walk(table, &segs, &HashMap::new())
}

fn walk(routes: &[RouteDef], segs: &[&str], params: &HashMap<String, String>) -> Option<Lookup> {
    // Literal routes win over parameterized ones at the same level
    for parameterized in [false, true] {
        for route in routes {
            let own = segments(route.path);
            if own.iter().any(|s| s.starts_with(':')) != parameterized {
                continue;
            }

            let Some((rest, captured)) = consume(&own, segs, params) else {
                continue;
            };

            if rest.is_empty() {
                if let Some(to) = route.redirect {
                    return Some(Lookup::Redirect(to.to_string()));
                }
                if let Some(component) = route.component {
                    return Some(Lookup::Match(RouteMatch {
                        component,
                        name: route.name,
                        params: captured,
                    }));
                }
                continue;
            }

            if !route.children.is_empty()
                && let Some(hit) = walk(&route.children, rest, &captured)
            {
                return Some(hit);
            }
        }
    }
    None
}

fn consume<'a>(
    own: &[&str],
    segs: &'a [&str],
    params: &HashMap<String, String>,
) -> Option<(&'a [&'a str], HashMap<String, String>)> {
    if own.len() > segs.len() {
        return None;
    }

    let mut captured = params.clone();
    for (pattern, seg) in own.iter().zip(segs) {
        if let Some(key) = pattern.strip_prefix(':') {
            captured.insert(key.to_string(), (*seg).to_string());
        } else if pattern != seg {
            return None;
        }
    }

    Some((&segs[own.len()..], captured))
}
