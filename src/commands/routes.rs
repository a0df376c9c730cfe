use crate::routes::{RouteDef, resolve, route_table};
use prettytable::{Table, format, row};

pub fn cmd_show_routes() -> Result<(), Box<dyn std::error::Error>> {
    let routes = route_table();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    table.add_row(row!["Path", "Component", "Redirect", "Name"]);
    push_rows(&mut table, &routes, "");
    table.printstd();

    Ok(())
}

pub fn cmd_resolve_route(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let routes = route_table();
    let hit = resolve(&routes, path)?;

    println!("component: {}", hit.component);
    if let Some(name) = hit.name {
        println!("name:      {}", name);
    }
    for (key, value) in &hit.params {
        println!("param:     {} = {}", key, value);
    }

    Ok(())
}

fn push_rows(table: &mut Table, routes: &[RouteDef], prefix: &str) {
    for route in routes {
        let full_path = if route.path.starts_with('/') {
            route.path.to_string()
        } else {
            format!("{}/{}", prefix.trim_end_matches('/'), route.path)
        };

        table.add_row(row![
            full_path,
            route.component.unwrap_or("-"),
            route.redirect.unwrap_or("-"),
            route.name.unwrap_or("-"),
        ]);

        push_rows(table, &route.children, &full_path);
    }
}
