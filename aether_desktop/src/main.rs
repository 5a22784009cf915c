//! Aether Desktop - Entry point for the Iced GUI application.

use aether_core::utils::config::Config;
use aether_core::utils::logger;
use aether_core::pipeline::EMPTY_INPUT_LINE;
use aether_core::{
    boot_script, submit, Console, Effect, FastrandSource, ParticleField, Sequencer, Severity,
    StagePhase, StageUnit, TelemetrySample,
};
use aether_desktop::canvas::FieldBackdrop;
use aether_desktop::styles::{
    ghost_button_style, input_shell_style, intent_input_style, module_card_style,
    primary_button_style, terminal_panel_style, validation_bar_style,
};
use aether_desktop::{
    app_theme, palette, PaletteColors, CONSOLE_TEXT_SIZE, FIELD_BOUNDS_HEIGHT, FIELD_BOUNDS_WIDTH,
    SIDE_PANEL_WIDTH, VALIDATION_BAR_HEIGHT,
};

use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration};
use iced::widget::canvas::{self, Canvas};
use iced::widget::{
    button, column, container, progress_bar, row, scrollable, stack, text, text_input, Space,
};
use iced::{window, Background, Color, Element, Font, Length, Subscription, Task};

/// Application state.
struct App {
    console: Console,
    field: ParticleField,
    field_cache: canvas::Cache,
    /// Live pipeline run, dropped once its script is exhausted.
    sequencer: Option<Sequencer>,
    thoughts: Vec<String>,
    synthesis_phase: StagePhase,
    validation_phase: StagePhase,
    deployment_phase: StagePhase,
    validation_progress: u8,
    telemetry: TelemetrySample,
    draft: String,
    config: Config,
    rng: FastrandSource,
    /// Error message if initialization failed
    init_error: Option<String>,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    DraftChanged(String),
    Synthesize,
    ClearTerminal,
    FrameTick,
    TypeTick,
    TelemetryTick,
    WindowResized(f32, f32),
}

/// Input field ID for focus management
fn input_id() -> iced::widget::Id {
    iced::widget::Id::new("intent-input")
}

impl App {
    /// Initializes the application. Shows an error screen if initialization
    /// fails.
    fn init() -> (Self, Task<Message>) {
        match Self::try_init() {
            // Focus the intent input on startup
            Ok(app) => (app, iced::widget::operation::focus(input_id())),
            Err(err) => {
                eprintln!("Initialization error: {err}");
                (Self::error_state(err.to_string()), Task::none())
            }
        }
    }

    /// Attempts to initialize the application, returning errors properly.
    fn try_init() -> anyhow::Result<Self> {
        // Initialize the global logger for debug file output
        let _ = logger::init_global_logger();

        let config = Config::load_or_default()?;
        let mut rng = match config.seed {
            Some(seed) => FastrandSource::with_seed(seed),
            None => FastrandSource::new(),
        };
        let field = ParticleField::new(
            FIELD_BOUNDS_WIDTH,
            FIELD_BOUNDS_HEIGHT,
            config.particle_count,
            config.link_distance,
            &mut rng,
        );
        let console = Console::new(config.cooldown_ticks());
        let sequencer = Sequencer::new(boot_script());
        logger::info(&format!("boot sequence {} started", sequencer.id()));

        Ok(Self {
            console,
            field,
            field_cache: canvas::Cache::new(),
            sequencer: Some(sequencer),
            thoughts: Vec::new(),
            synthesis_phase: StagePhase::Standby,
            validation_phase: StagePhase::Standby,
            deployment_phase: StagePhase::Standby,
            validation_progress: 0,
            telemetry: TelemetrySample::default(),
            draft: String::new(),
            config,
            rng,
            init_error: None,
        })
    }

    fn error_state(error: String) -> Self {
        let config = Config::default();
        let mut rng = FastrandSource::new();
        let field = ParticleField::new(
            FIELD_BOUNDS_WIDTH,
            FIELD_BOUNDS_HEIGHT,
            config.particle_count,
            config.link_distance,
            &mut rng,
        );
        Self {
            console: Console::new(config.cooldown_ticks()),
            field,
            field_cache: canvas::Cache::new(),
            sequencer: None,
            thoughts: Vec::new(),
            synthesis_phase: StagePhase::Standby,
            validation_phase: StagePhase::Standby,
            deployment_phase: StagePhase::Standby,
            validation_progress: 0,
            telemetry: TelemetrySample::default(),
            draft: String::new(),
            config,
            rng,
            init_error: Some(error),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DraftChanged(value) => self.draft = value,
            Message::Synthesize => match submit(&self.draft) {
                None => {
                    self.console.enqueue(EMPTY_INPUT_LINE, Severity::Error);
                }
                Some((receipt, intent, script)) => {
                    self.console.enqueue(receipt, Severity::Info);
                    self.thoughts.clear();
                    let sequencer = Sequencer::new(script);
                    logger::info(&format!(
                        "pipeline {} started: {}",
                        sequencer.id(),
                        intent.label()
                    ));
                    self.sequencer = Some(sequencer);
                }
            },
            Message::ClearTerminal => {
                self.console.clear();
                self.console
                    .enqueue("TERMINAL BUFFER FLUSHED.", Severity::Warn);
            }
            Message::TypeTick => self.console.tick(),
            Message::FrameTick => {
                if self.config.field_enabled {
                    self.field.tick();
                    self.field_cache.clear();
                }
                self.pump_sequencer();
            }
            Message::TelemetryTick => {
                self.telemetry = TelemetrySample::draw(&mut self.rng);
                if self.telemetry.is_noisy() {
                    self.console
                        .enqueue(self.telemetry.noise_warning(), Severity::Warn);
                }
            }
            Message::WindowResized(width, height) => {
                self.field.resize(width, height);
            }
        }
        Task::none()
    }

    /// Feeds one frame of elapsed time to the live pipeline and applies
    /// whatever effects fired.
    fn pump_sequencer(&mut self) {
        let Some(sequencer) = self.sequencer.as_mut() else {
            return;
        };
        let effects = sequencer.advance(self.config.frame_interval_ms, &mut self.rng);
        let finished = sequencer.is_finished();
        for effect in effects {
            self.apply_effect(effect);
        }
        if finished {
            if let Some(sequencer) = self.sequencer.take() {
                logger::info(&format!("pipeline {} finished", sequencer.id()));
            }
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Log { text, severity } => self.console.enqueue(text, severity),
            Effect::Thought(entry) => self.thoughts.push(entry),
            Effect::Status { unit, phase } => match unit {
                StageUnit::Synthesis => self.synthesis_phase = phase,
                StageUnit::Validation => self.validation_phase = phase,
                StageUnit::Deployment => self.deployment_phase = phase,
            },
            Effect::Progress(value) => self.validation_progress = value,
            Effect::BeginValidation => self.validation_progress = 0,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            time::every(Duration::from_millis(self.config.telemetry_interval_ms))
                .map(|_| Message::TelemetryTick),
            window::resize_events()
                .map(|(_id, size)| Message::WindowResized(size.width, size.height)),
        ];

        // The frame clock also drives the pipeline, so it stays on while a
        // run is live even when the field is disabled.
        if self.config.field_enabled || self.sequencer.is_some() {
            subscriptions.push(
                time::every(Duration::from_millis(self.config.frame_interval_ms))
                    .map(|_| Message::FrameTick),
            );
        }
        if !self.console.is_idle() {
            subscriptions.push(
                time::every(Duration::from_millis(self.config.type_interval_ms))
                    .map(|_| Message::TypeTick),
            );
        }

        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = palette();

        // Show error screen if initialization failed
        if let Some(ref error) = self.init_error {
            return self.error_view(error, pal);
        }

        let backdrop: Element<'_, Message> = if self.config.field_enabled {
            Canvas::new(FieldBackdrop::<Message>::new(
                &self.field,
                &self.field_cache,
                pal,
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        } else {
            container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(pal.background)),
                    ..Default::default()
                })
                .into()
        };

        let main_layer = column![
            self.header_bar(pal),
            row![
                self.terminal_panel(pal),
                column![self.status_card(pal), self.thought_card(pal)]
                    .width(Length::Fixed(SIDE_PANEL_WIDTH))
                    .spacing(14),
            ]
            .spacing(14)
            .height(Length::Fill),
            self.input_bar(pal),
        ]
        .spacing(14)
        .padding(20);

        container(stack(vec![backdrop, main_layer.into()]))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn header_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let deco_color = if self.telemetry.is_noisy() {
            pal.danger
        } else {
            pal.accent_alt
        };

        row![
            text("AETHER DECK")
                .size(20)
                .font(Font::MONOSPACE)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.accent)
                }),
            Space::new().width(Length::Fixed(12.0)),
            text("AUTONOMOUS DEVELOPMENT ENGINE")
                .size(10)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted)
                }),
            Space::new().width(Length::Fill),
            readout(
                "DECOHERENCE",
                self.telemetry.decoherence_label(),
                deco_color,
                pal
            ),
            Space::new().width(Length::Fixed(24.0)),
            readout(
                "ENTROPY",
                self.telemetry.entropy.label().to_string(),
                pal.accent,
                pal
            ),
        ]
        .align_y(iced::Alignment::Center)
        .into()
    }

    fn terminal_panel(&self, pal: PaletteColors) -> Element<'_, Message> {
        let mut lines: Vec<Element<'_, Message>> = self
            .console
            .lines()
            .iter()
            .map(|line| console_row(line.timestamp.clone(), line.severity, line.text.clone(), pal))
            .collect();
        if let Some((timestamp, severity, visible)) = self.console.revealing_line() {
            lines.push(console_row(timestamp.to_string(), severity, visible, pal));
        }

        let output = scrollable(column(lines).spacing(4).padding(8))
            .width(Length::Fill)
            .height(Length::Fill)
            .anchor_bottom();

        let header = row![
            text("SYSTEM CONSOLE")
                .size(11)
                .font(Font::MONOSPACE)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted)
                }),
            Space::new().width(Length::Fill),
            button(text("CLEAR").size(10).font(Font::MONOSPACE))
                .on_press(Message::ClearTerminal)
                .padding([4, 10])
                .style(ghost_button_style(pal)),
        ]
        .align_y(iced::Alignment::Center);

        container(column![header, output].spacing(8))
            .padding(12)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(terminal_panel_style(pal))
            .into()
    }

    fn status_card(&self, pal: PaletteColors) -> Element<'_, Message> {
        container(
            column![
                text("SYNTHESIS MODULES")
                    .size(11)
                    .font(Font::MONOSPACE)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.accent)
                    }),
                Space::new().height(Length::Fixed(8.0)),
                unit_row("CODE SYNTHESIS", self.synthesis_phase, pal),
                unit_row("SANDBOX VALIDATION", self.validation_phase, pal),
                unit_row("DEPLOYMENT", self.deployment_phase, pal),
                Space::new().height(Length::Fixed(8.0)),
                progress_bar(0.0..=100.0, f32::from(self.validation_progress))
                    .girth(VALIDATION_BAR_HEIGHT)
                    .style(validation_bar_style(pal)),
            ]
            .spacing(6),
        )
        .padding(14)
        .width(Length::Fill)
        .style(module_card_style(pal))
        .into()
    }

    fn thought_card(&self, pal: PaletteColors) -> Element<'_, Message> {
        let body: Element<'_, Message> = if self.thoughts.is_empty() {
            text("COGNITION STREAM IDLE.")
                .size(11)
                .font(Font::MONOSPACE)
                .style(move |_| iced::widget::text::Style {
                    color: Some(pal.muted)
                })
                .into()
        } else {
            let entries: Vec<Element<'_, Message>> = self
                .thoughts
                .iter()
                .map(|entry| {
                    text(format!("> {entry}"))
                        .size(11)
                        .font(Font::MONOSPACE)
                        .style(move |_| iced::widget::text::Style {
                            color: Some(pal.accent_alt)
                        })
                        .into()
                })
                .collect();
            scrollable(column(entries).spacing(6))
                .width(Length::Fill)
                .height(Length::Fill)
                .anchor_bottom()
                .into()
        };

        container(
            column![
                text("AGENT COGNITION")
                    .size(11)
                    .font(Font::MONOSPACE)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.accent)
                    }),
                Space::new().height(Length::Fixed(8.0)),
                body,
            ]
            .spacing(6),
        )
        .padding(14)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(module_card_style(pal))
        .into()
    }

    fn input_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let input_field = text_input("DESCRIBE YOUR INTENT...", &self.draft)
            .id(input_id())
            .on_input(Message::DraftChanged)
            .on_submit(Message::Synthesize)
            .padding(12)
            .size(13)
            .font(Font::MONOSPACE)
            .style(intent_input_style(pal))
            .width(Length::Fill);

        let synthesize_btn = button(text("SYNTHESIZE").size(12).font(Font::MONOSPACE))
            .on_press(Message::Synthesize)
            .padding([10, 18])
            .style(primary_button_style(pal));

        container(
            row![input_field, synthesize_btn]
                .spacing(10)
                .align_y(iced::Alignment::Center),
        )
        .padding(6)
        .width(Length::Fill)
        .style(input_shell_style(pal))
        .into()
    }

    fn error_view(&self, error: &str, pal: PaletteColors) -> Element<'_, Message> {
        let error_text = error.to_string();
        container(
            column![
                text("Initialization Error")
                    .size(32)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.danger)
                    }),
                text(error_text)
                    .size(16)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.text)
                    }),
            ]
            .spacing(16)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_| container::Style {
            background: Some(Background::Color(pal.background)),
            ..Default::default()
        })
        .into()
    }
}

/// One committed or in-flight console line.
fn console_row(
    timestamp: String,
    severity: Severity,
    body: String,
    pal: PaletteColors,
) -> Element<'static, Message> {
    row![
        text(format!("[{timestamp}]"))
            .size(CONSOLE_TEXT_SIZE)
            .font(Font::MONOSPACE)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.muted)
            }),
        Space::new().width(Length::Fixed(8.0)),
        text(body)
            .size(CONSOLE_TEXT_SIZE)
            .font(Font::MONOSPACE)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.severity_color(severity))
            }),
    ]
    .into()
}

/// Labeled header readout, value underneath.
fn readout(
    label: &'static str,
    value: String,
    value_color: Color,
    pal: PaletteColors,
) -> Element<'static, Message> {
    column![
        text(label).size(9).style(move |_| iced::widget::text::Style {
            color: Some(pal.muted)
        }),
        text(value)
            .size(14)
            .font(Font::MONOSPACE)
            .style(move |_| iced::widget::text::Style {
                color: Some(value_color)
            }),
    ]
    .spacing(2)
    .align_x(iced::Alignment::End)
    .into()
}

/// Status-card row pairing a module name with its phase label.
fn unit_row(
    name: &'static str,
    phase: StagePhase,
    pal: PaletteColors,
) -> Element<'static, Message> {
    row![
        text(name)
            .size(11)
            .font(Font::MONOSPACE)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.text)
            }),
        Space::new().width(Length::Fill),
        text(phase.label())
            .size(11)
            .font(Font::MONOSPACE)
            .style(move |_| iced::widget::text::Style {
                color: Some(pal.phase_color(phase))
            }),
    ]
    .align_y(iced::Alignment::Center)
    .into()
}

fn main() -> iced::Result {
    fn get_theme(_: &App) -> iced::Theme {
        app_theme()
    }

    iced::application(App::init, App::update, App::view)
        .title("Aether Deck")
        .subscription(App::subscription)
        .theme(get_theme)
        .run()
}
