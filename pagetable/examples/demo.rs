use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, queue, style::Print, terminal};
use pagetable::text::{render_pager, render_table};
use pagetable::{rows_from_json, Control, MemorySurface, PaginatedTable, Row, TableConfig};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Usage: `cargo run --example demo [rows.json]`
///
/// Left/Right page, 1-9 jump to a page, `s` cycles the page size, `q` quits.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let rows = match std::env::args().nth(1) {
        Some(path) => rows_from_json(&std::fs::read_to_string(path)?)?,
        None => sample_rows(),
    };

    let mut table = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().rows_per_page(10),
        rows,
    )?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut table, &mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    table: &mut PaginatedTable<MemorySurface>,
    stdout: &mut io::Stdout,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        draw(table, stdout)?;

        let CrosstermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Left | KeyCode::Char('h') => {
                table.trigger(Control::Previous, None);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                table.trigger(Control::Next, None);
            }
            KeyCode::Char('s') => {
                let sizes = table.page_sizes();
                let current = sizes
                    .iter()
                    .position(|&s| s == table.rows_per_page())
                    .unwrap_or(0);
                let next = sizes[(current + 1) % sizes.len()].to_string();
                table.trigger(Control::PageSize, Some(&next));
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let page = c.to_digit(10).unwrap_or(1) as usize;
                table.trigger(Control::Page(page), None);
            }
            _ => {}
        }
    }
}

fn draw(table: &PaginatedTable<MemorySurface>, stdout: &mut io::Stdout) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let body = render_table(table.table_surface().nodes());
    let pager = render_pager(table.pager_surface().nodes());
    let status = format!(
        "page {}/{} - {} rows",
        table.current_page(),
        table.page_count(),
        table.total_rows()
    );

    for line in body.lines().chain(["", pager.as_str(), status.as_str()]) {
        queue!(stdout, Print(line), cursor::MoveToNextLine(1))?;
    }
    stdout.flush()
}

fn sample_rows() -> Vec<Row> {
    const CITIES: [&str; 6] = ["Oslo", "Lima", "Kyiv", "Perth", "Quito", "Accra"];
    (1..=137)
        .map(|i: usize| {
            Row::new()
                .with("id", i)
                .with("city", CITIES[i % CITIES.len()])
                .with("score", (i * 37 % 101) as f64 / 10.0)
                .with("active", i % 3 != 0)
        })
        .collect()
}
