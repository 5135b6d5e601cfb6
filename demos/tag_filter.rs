/// Tag filter walkthrough: render tag cells, then click through a few tags
use tagfilter::{Address, FilterConfig, TagBindings};

fn main() {
    let mut bindings = TagBindings::new(FilterConfig::default());

    // Each row's tag cell, given as its text nodes
    let rows: [&[&str]; 3] = [&["rust, cli"], &["web dev,rust"], &["broken", "cell"]];
    let rendered = bindings.render(&rows);

    for (row, tags) in rendered.iter().enumerate() {
        match tags {
            Some(tags) => {
                let links: Vec<String> = tags
                    .iter()
                    .map(|tag| match tag.id {
                        Some(id) => format!("[{}]({id})", tag.label.trim()),
                        None => tag.label.clone(),
                    })
                    .collect();
                println!("row {row}: {}", links.join(", "));
            }
            None => println!("row {row}: skipped"),
        }
    }
    println!();

    let mut here = Address::parse("/list?page=2");
    println!("start: {here}");

    // Click "rust" in row 0, "web dev" in row 1, then "rust" in row 1
    let clicks = [
        rendered[0].as_ref().and_then(|t| t[0].id),
        rendered[1].as_ref().and_then(|t| t[0].id),
        rendered[1].as_ref().and_then(|t| t[1].id),
    ];
    for id in clicks.into_iter().flatten() {
        match bindings.click(id, &here) {
            Ok(nav) => {
                println!("click {id}: {:?} -> {}", nav.outcome(), nav.target());
                here = Address::parse(nav.target());
            }
            Err(err) => println!("click {id}: {err}"),
        }
    }
}
