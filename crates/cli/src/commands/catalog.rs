use caliope_core::Catalog;

use crate::commands::CommandResult;

pub fn run() -> CommandResult {
    let catalog = Catalog::seeded();

    let plan_lines: Vec<String> = catalog
        .memberships()
        .iter()
        .map(|plan| {
            let marker = if plan.is_popular { " [popular]" } else { "" };
            format!("  - {}: COP {}{}{}", plan.name, plan.price, plan.price_description, marker)
        })
        .collect();

    let message = format!(
        "seed catalog ready: {} services, {} products, {} membership plans\n{}",
        catalog.services().len(),
        catalog.products().len(),
        catalog.memberships().len(),
        plan_lines.join("\n")
    );

    CommandResult::success("catalog", message)
}
