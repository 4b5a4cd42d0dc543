mod screen;

use rhythm_mini::{
    Config, Game, NoteKind,
    log::{Log, log},
};
use screen::Screen;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    mouse::MouseButton,
    pixels::Color,
};
use std::time::Instant;

fn main() {
    if let Err(e) = practically_main() {
        log(Log::Error, e);
    }
}

fn note_color(kind: NoteKind) -> Color {
    match kind {
        NoteKind::Normal => Color::RGB(90, 160, 255),
        NoteKind::Critical => Color::YELLOW,
        NoteKind::Flick => Color::RGB(255, 140, 0),
    }
}

fn practically_main() -> Result<(), String> {
    const TITLE: &str = "Rhythm Mini";
    const SIZE: (u32, u32) = (480, 854);
    const TICKS_PER_SEC: f32 = 60.0;
    const MAX_STEP: f32 = 4.0;
    const LINE: f32 = 1.0;

    let density = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .map_err(|e| format!("density must be a number ({e})"))?,
        None => 1.0,
    };

    let mut game = Game::new(Config::with_density(density))?;
    let mut screen = Screen::new(TITLE, SIZE)?;
    let mut event_pump = screen.event_pump()?;

    let (width, height) = screen.size()?;
    game.on_dimensions_known(width as f32, height as f32);

    log(Log::Info, format!("started at {width}x{height}, density {density}"));

    let mut last_frame = Instant::now();
    let mut last_totals = None;

    'main_loop: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::ESCAPE),
                    ..
                } => break 'main_loop,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    timestamp,
                    x,
                    y,
                    ..
                } => game.press(x as f32, y as f32, timestamp as u64),
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    timestamp,
                    x,
                    y,
                    ..
                } => {
                    game.release(x as f32, y as f32, timestamp as u64);
                }
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::Leave => game.abandon(),
                    WindowEvent::SizeChanged(..) => {
                        let (width, height) = screen.size()?;
                        game.on_dimensions_known(width as f32, height as f32);
                    }
                    _ => (),
                },
                _ => (),
            }
        }

        let now = Instant::now();
        let step = ((now - last_frame).as_secs_f32() * TICKS_PER_SEC).min(MAX_STEP);
        last_frame = now;
        game.advance(Some(step));

        screen.clear();

        if let Some(layout) = game.layout().copied() {
            let (width, height) = (layout.lane_width * layout.lane_count as f32, layout.visible_height);

            for lane in 1..layout.lane_count {
                screen.fill(
                    (lane as f32 * layout.lane_width, 0.0),
                    (LINE, height),
                    Color::RGB(0x40, 0x40, 0x40),
                )?;
            }

            screen.fill((0.0, layout.hit_line_y), (width, LINE), Color::GRAY)?;

            for note in game.notes() {
                screen.fill(
                    (layout.centered_left(note.lane(), note.width()), note.y()),
                    (note.width(), note.height()),
                    note_color(note.kind()),
                )?;
            }
        }

        let totals = (game.score(), game.miss_count());
        if last_totals != Some(totals) {
            screen.set_title(format!("{TITLE} | Score: {} | Miss: {}", totals.0, totals.1))?;
            last_totals = Some(totals);
        }

        screen.present();
    }

    log(
        Log::Info,
        format!("final score {}, {} miss(es)", game.score(), game.miss_count()),
    );

    Ok(())
}
