//! Launch the deeplist demo.

use std::{
    cell::Cell,
    fs::OpenOptions,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Mutex,
};

use anyhow::{Context, Result};
use clap::Parser;
use deeplist::{
    DeepList, Entry, ListConfig, TermBuf,
    backend::crossterm::{
        CrosstermRender, TerminalSession, install_panic_hook, read_event, terminal_size,
    },
    event::{Event, key},
    style::Style,
};

/// CLI flags for the deeplist demo.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// File to write logs to.
    #[clap(long, default_value = "deep_list.log")]
    log: PathBuf,

    /// JSON file with list configuration.
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Hide secondary text.
    #[clap(long)]
    no_secondary: bool,

    /// Stop at the ends of the list instead of wrapping around.
    #[clap(long)]
    no_wrap: bool,

    /// Don't capture the mouse.
    #[clap(long)]
    no_mouse: bool,
}

/// Send tracing output to a file, so it never lands on the terminal we draw to.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

/// Build the demo list. Item 4 toggles its own sub-list, and "Quit" sets the
/// quit flag.
fn build_list(config: ListConfig, quit: &Rc<Cell<bool>>) -> DeepList {
    let mut list = DeepList::new().with_config(config);
    let q = quit.clone();
    list.add_item(Entry::new("List item 1", "").with_shortcut('a'))
        .add_item(Entry::new("List item 2", "").with_shortcut('b'))
        .add_item(Entry::new("List item 3", "").with_shortcut('c'))
        .add_item(
            Entry::new("List item 4", "")
                .with_shortcut('d')
                .on_select(|l| {
                    l.toggle_sub_list_display(3);
                }),
        )
        .add_sub_item(Entry::new("Sub me", "").with_shortcut('g'), false)
        .add_sub_item(Entry::new("Test me", "").with_shortcut('g'), false)
        .add_sub_item(Entry::new("Roll me", "").with_shortcut('g'), true)
        .add_item(
            Entry::new("Quit", "Press to exit")
                .with_shortcut('q')
                .on_select(move |_| q.set(true)),
        );

    list.set_changed_func(|_, s| tracing::info!("changed: {} {:?}", s.path, s.main_text))
        .set_selected_func(|_, s| tracing::info!("selected: {} {:?}", s.path, s.main_text));
    let q = quit.clone();
    list.set_done_func(move |_| q.set(true));
    list
}

/// Draw and dispatch events until the quit flag is set.
fn run(list: &mut DeepList, quit: &Cell<bool>, mouse: bool) -> Result<()> {
    let _hook = install_panic_hook();
    let mut session = TerminalSession::start(mouse)?;
    let mut render = CrosstermRender::default();
    let mut size = terminal_size()?;

    while !quit.get() {
        let area = size.rect();
        let mut buf = TermBuf::new(size, ' ', Style::default());
        list.draw(&mut buf, area, true)?;
        buf.render(&mut render)?;

        match read_event()? {
            Event::Resize(s) => size = s,
            Event::Key(k) if k == key::Ctrl + 'c' => quit.set(true),
            e => {
                list.handle_event(&e, area);
            }
        }
    }
    session.stop()?;
    Ok(())
}

/// Run the deeplist demo.
fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log)?;

    let mut config = match &args.config {
        Some(path) => ListConfig::load(path)?,
        None => ListConfig::default(),
    };
    if args.no_secondary {
        config = config.with_secondary_text(false);
    }
    if args.no_wrap {
        config = config.with_wrap_around(false);
    }

    let quit = Rc::new(Cell::new(false));
    let mut list = build_list(config, &quit);
    tracing::info!("starting with {} items", list.item_count());
    run(&mut list, &quit, !args.no_mouse)
}
