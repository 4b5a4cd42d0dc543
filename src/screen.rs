use rhythm_mini::strerr::Strerr;
use sdl2::{EventPump, Sdl, pixels::Color, rect::Rect, render::Canvas, video::Window};

pub struct Screen {
    sdl_context: Sdl,
    canvas: Canvas<Window>,
}

impl Screen {
    pub fn new(title: &str, (width, height): (u32, u32)) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .context("creating window")?;

        let canvas = window
            .into_canvas()
            .present_vsync()
            .accelerated()
            .build()
            .context("creating canvas")?;

        Ok(Self {
            sdl_context,
            canvas,
        })
    }

    pub fn event_pump(&self) -> Result<EventPump, String> {
        self.sdl_context.event_pump()
    }

    pub fn size(&self) -> Result<(u32, u32), String> {
        self.canvas.output_size()
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    pub fn set_title(&mut self, title: impl AsRef<str>) -> Result<(), String> {
        self.canvas.window_mut().set_title(title.as_ref()).strerr()
    }

    /// Float geometry straight from the game; sizes below a pixel still draw.
    pub fn fill(&mut self, (x, y): (f32, f32), (w, h): (f32, f32), color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.fill_rect(Rect::new(
            x.round() as i32,
            y.round() as i32,
            (w.round() as u32).max(1),
            (h.round() as u32).max(1),
        ))
    }
}
