use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::event::{self, Event};
use iced::widget::canvas::{Canvas, Frame, Geometry, Path, Program, Stroke, Text};
use iced::widget::{column, container, text};
use iced::{mouse, Alignment, Color, Command, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use crate::plot::{format_tick, nearest_point, tooltip_lines, PlotLayout};
use crate::sweep::Sweep;

pub const CHART_CAPTION: &str = "Amateur radio band reference: wavelength = c / f, c = 3.0e8 m/s";
pub const WINDOW_SIZE: (u32, u32) = (800, 600);

const MARKER_RADIUS: f32 = 2.5;
const PICK_RADIUS: f32 = 8.0;

fn color_bg() -> Color {
    Color::from_rgb8(22, 22, 26)
}

fn color_grid() -> Color {
    Color::from_rgb8(52, 52, 62)
}

fn color_axis() -> Color {
    Color::from_rgb8(150, 150, 160)
}

fn color_text() -> Color {
    Color::from_rgb8(220, 220, 228)
}

fn color_marker() -> Color {
    Color::from_rgb8(0, 190, 255)
}

fn color_highlight() -> Color {
    Color::from_rgb8(255, 140, 0)
}

#[derive(Debug, Clone)]
pub enum Message {
    Hovered(Option<usize>),
}

pub struct ChartApp {
    sweep: Sweep,
    hovered: Option<usize>,
}

impl iced::Application for ChartApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Sweep;

    fn new(sweep: Sweep) -> (Self, Command<Self::Message>) {
        (ChartApp { sweep, hovered: None }, Command::none())
    }

    fn title(&self) -> String {
        self.sweep.title().to_string()
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::Hovered(index) => {
                self.hovered = index;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let chart = Canvas::new(ScatterView {
            title: self.sweep.title().to_string(),
            points: self.sweep.points_mhz().collect(),
            hovered: self.hovered,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let content = column![chart, text(CHART_CAPTION).size(13)]
            .spacing(6)
            .align_items(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(8)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Blocks until the chart window is closed.
pub fn show(sweep: Sweep) -> iced::Result {
    use iced::Application;

    let mut settings = iced::Settings::with_flags(sweep);
    settings.window.size = WINDOW_SIZE;
    ChartApp::run(settings)
}

struct ScatterView {
    title: String,
    points: Vec<(f64, f64)>,
    hovered: Option<usize>,
}

impl ScatterView {
    fn screen_points(&self, layout: &PlotLayout) -> Vec<Point> {
        self.points.iter().map(|(x, y)| layout.to_screen(*x, *y)).collect()
    }

    fn draw_axes(&self, frame: &mut Frame, layout: &PlotLayout) {
        let area = layout.area;
        let bottom = area.y + area.height;
        let right = area.x + area.width;

        let x_ticks = layout.x_ticks();
        for tick in &x_ticks {
            let x = layout.to_screen(*tick, layout.y.min).x;
            let line = Path::line(Point::new(x, area.y), Point::new(x, bottom));
            frame.stroke(&line, Stroke::default().with_width(1.0).with_color(color_grid()));
            frame.fill_text(Text {
                content: format_tick(*tick, &x_ticks),
                position: Point::new(x, bottom + 6.0),
                color: color_axis(),
                size: 12.0,
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Top,
                ..Text::default()
            });
        }

        let y_ticks = layout.y_ticks();
        for tick in &y_ticks {
            let y = layout.to_screen(layout.x.min, *tick).y;
            let line = Path::line(Point::new(area.x, y), Point::new(right, y));
            frame.stroke(&line, Stroke::default().with_width(1.0).with_color(color_grid()));
            frame.fill_text(Text {
                content: format_tick(*tick, &y_ticks),
                position: Point::new(area.x - 6.0, y),
                color: color_axis(),
                size: 12.0,
                horizontal_alignment: Horizontal::Right,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        let axes = Path::new(|builder| {
            builder.move_to(Point::new(area.x, area.y));
            builder.line_to(Point::new(area.x, bottom));
            builder.line_to(Point::new(right, bottom));
        });
        frame.stroke(&axes, Stroke::default().with_width(1.5).with_color(color_axis()));

        frame.fill_text(Text {
            content: "Frequency (MHz)".to_string(),
            position: Point::new(area.center_x(), bottom + 28.0),
            color: color_text(),
            size: 14.0,
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Top,
            ..Text::default()
        });
        // Canvas text cannot be rotated, so the y label sits above the axis.
        frame.fill_text(Text {
            content: "Wavelength (m)".to_string(),
            position: Point::new(area.x, area.y - 8.0),
            color: color_text(),
            size: 14.0,
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Bottom,
            ..Text::default()
        });
        frame.fill_text(Text {
            content: self.title.clone(),
            position: Point::new(area.center_x(), 6.0),
            color: color_text(),
            size: 18.0,
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Top,
            ..Text::default()
        });
    }

    fn draw_tooltip(&self, frame: &mut Frame, anchor: Point, index: usize) {
        let (mhz, meters) = self.points[index];
        let lines = tooltip_lines(mhz, meters);
        let size = Size::new(118.0, 40.0);

        // Flip to the other side of the point near the right/top edges.
        let mut origin = Point::new(anchor.x + 10.0, anchor.y - size.height - 10.0);
        if origin.x + size.width > frame.width() {
            origin.x = anchor.x - size.width - 10.0;
        }
        if origin.y < 0.0 {
            origin.y = anchor.y + 10.0;
        }

        let bg = Path::rectangle(origin, size);
        frame.fill(&bg, Color::from_rgba(0.08, 0.08, 0.1, 0.92));
        frame.stroke(&bg, Stroke::default().with_width(1.0).with_color(color_highlight()));
        for (i, line) in lines.into_iter().enumerate() {
            frame.fill_text(Text {
                content: line,
                position: Point::new(origin.x + 8.0, origin.y + 5.0 + i as f32 * 16.0),
                color: color_text(),
                size: 13.0,
                ..Text::default()
            });
        }
    }
}

impl Program<Message, Renderer> for ScatterView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let Event::Mouse(mouse_event) = event else {
            return (event::Status::Ignored, None);
        };
        let hovered = match mouse_event {
            mouse::Event::CursorMoved { .. } => cursor.position_in(bounds).and_then(|position| {
                let layout = PlotLayout::fit(bounds.size(), &self.points);
                nearest_point(&self.screen_points(&layout), position, PICK_RADIUS)
            }),
            mouse::Event::CursorLeft => None,
            _ => return (event::Status::Ignored, None),
        };
        if hovered == self.hovered {
            (event::Status::Ignored, None)
        } else {
            (event::Status::Captured, Some(Message::Hovered(hovered)))
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let bg = Path::rectangle(Point::ORIGIN, frame.size());
        frame.fill(&bg, color_bg());

        let layout = PlotLayout::fit(frame.size(), &self.points);
        self.draw_axes(&mut frame, &layout);

        let screen = self.screen_points(&layout);
        let markers = Path::new(|builder| {
            for p in &screen {
                builder.circle(*p, MARKER_RADIUS);
            }
        });
        frame.fill(&markers, color_marker());

        if let Some(index) = self.hovered.filter(|i| *i < screen.len()) {
            let anchor = screen[index];
            frame.fill(&Path::circle(anchor, MARKER_RADIUS * 2.0), color_highlight());
            self.draw_tooltip(&mut frame, anchor, index);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(&self, _state: &Self::State, bounds: Rectangle, cursor: mouse::Cursor) -> mouse::Interaction {
        if self.hovered.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::Idle
        }
    }
}
