#![forbid(unsafe_code)]

//! Scripted walkthrough of the page model.
//!
//! Mounts the page against a pref store, walks a simulated clock past the
//! CTA auto-open, interacts with the catalogs and the contact form, and
//! prints the resulting view tree as an indented outline after each step.
//! Pass a file path as the first argument to persist overlay markers
//! between runs; without one, prefs live in memory.

use std::path::PathBuf;
use std::time::Duration;

use pelagic::FilePrefs;
use pelagic::prelude::*;

mod outline;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut prefs: Box<dyn PrefStore> = match std::env::args().nth(1) {
        Some(path) => Box::new(FilePrefs::open(PathBuf::from(path))),
        None => Box::new(MemoryPrefs::new()),
    };

    let mut page = Page::mount(prefs.as_ref());

    banner("Initial composition");
    print_page(&page.view());

    // Let the CTA timer elapse.
    if page.tick(Duration::from_millis(2000)) {
        banner("Overlay opened after 2s");
        print_page(&page.view());
        page.overlay.close(prefs.as_mut());
        tracing::info!("overlay closed, seen marker persisted");
    } else {
        tracing::info!("overlay stayed closed (suppressed by a previous run)");
    }

    banner("Filter the team to robotics, open a product dossier");
    page.team.set_filter("robotics");
    page.ecosystem.select("deepseaguard");
    print_page(&page.view());
    page.ecosystem.clear_selection();
    page.team.set_filter("all");

    banner("Submit the contact form");
    page.contact.set_field(Field::Name, "Avery Chen");
    page.contact.set_field(Field::Email, "avery@example.org");
    page.contact.set_field(Field::Message, "Tell me more about DeepSeaGuard.");
    page.contact.submit();
    page.tick(Duration::from_millis(2000));
    print_page(&page.view());

    // Display window elapses; fields clear.
    page.tick(Duration::from_millis(3000));
    banner("Form reset after the display window");
    print_page(&page.view());
}

fn banner(title: &str) {
    println!("\n=== {title} ===");
}

fn print_page(nodes: &[ViewNode]) {
    for node in nodes {
        print!("{}", outline::render(node));
    }
}
