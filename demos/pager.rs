//! Interactive demo: a list of favourite things.
//!
//! ↑/↓ move, `d` removes the selected item, `r` marks it as read,
//! ctrl+c quits. Logs go to `list-pager-demo.log` in the temp directory.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;

use list_pager::key::short_help_view;
use list_pager::prelude::*;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

const THINGS: &[&str] = &[
    "Raspberry Pi's",
    "Nutella",
    "Bitter melon",
    "Nice socks",
    "Eight hours of sleep",
    "Cats",
    "Plantasia, the album",
    "Pour over coffee",
    "VR",
    "Noguchi Lamps",
    "Linux",
    "Business school",
    "Pottery",
    "Shampoo",
    "Table tennis",
    "Milk crates",
    "Afternoon tea",
    "Stickers",
    "20° Weather",
    "Warm light",
    "The vernal equinox",
    "Gaffer's tape",
    "Terrycloth",
];

fn main() -> list_pager::Result<()> {
    let log_path = std::env::temp_dir().join("list-pager-demo.log");
    let log_file = File::create(&log_path)?;
    if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("logging disabled: {err}");
    }

    let config = PagerConfig::default().with_size(80, 24);
    let mut pager = ListPager::terminal(config);

    let last_selected = Rc::new(RefCell::new(None));
    let tracker = Rc::clone(&last_selected);
    pager.on(EventKind::Select, move |event: &Event<'_, usize>| {
        if let Event::Select(id) = event {
            *tracker.borrow_mut() = Some(**id);
        }
    });
    pager.on(EventKind::Empty, |_| info!("nothing left to pick"));

    for (id, label) in THINGS.iter().enumerate() {
        pager.add(id, *label)?;
    }

    pager.start()?;
    while pager.is_attached() {
        let Some(event) = pager.input_mut().read_event()? else {
            break;
        };
        match event.key.as_ref().map(|key| key.name.as_str()) {
            Some("d") => {
                if !pager.is_empty() {
                    pager.remove(None)?;
                }
            }
            Some("r") => {
                if let Some(&id) = pager.selected() {
                    let label = format!("{} (read)", THINGS[id]);
                    pager.update(&id, label)?;
                }
            }
            _ => pager.on_keypress(event.ch, event.key.as_ref())?,
        }
    }
    pager.stop()?;

    println!("{}", short_help_view(pager.keymap()));
    match *last_selected.borrow() {
        Some(id) => println!("last selected: {} (page {})", THINGS[id], pager.page_indicator()),
        None => println!("nothing selected"),
    }
    println!("log written to {}", log_path.display());
    Ok(())
}
