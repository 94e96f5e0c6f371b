use crate::theme::Theme;
use clap::Args;
use tictactoe_core as game;
use game::{CellIndex, Mark};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Marked(Mark),
    Winning(Mark),
}

impl ViewCellState {
    const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Marked(mark) | Self::Winning(mark) => Some(mark),
        }
    }
}

/// The one game a page owns, plus the adapters the view reads from it.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::PlayEngine,
}

impl GameSession {
    fn new() -> Self {
        Self {
            engine: game::reset(),
        }
    }

    fn cell_state_at(&self, index: CellIndex) -> ViewCellState {
        let on_winning_line = self.engine.winner().is_some_and(|win| win.contains(index));
        match self.engine.cell_at(index).and_then(game::Cell::mark) {
            Some(mark) if on_winning_line => ViewCellState::Winning(mark),
            Some(mark) => ViewCellState::Marked(mark),
            None => ViewCellState::Empty,
        }
    }

    fn can_play_at(&self, index: CellIndex) -> bool {
        self.engine.can_play_at(index)
    }

    fn is_playable(&self) -> bool {
        self.engine.is_active()
    }

    fn can_reset(&self) -> bool {
        self.engine.has_moves()
    }

    fn status_text(&self) -> String {
        self.engine.evaluate().status_text()
    }

    fn status_class(&self) -> &'static str {
        match self.engine.status() {
            game::Status::Turn(Mark::X) => "turn-x",
            game::Status::Turn(Mark::O) => "turn-o",
            game::Status::Won(_) => "win",
            game::Status::Draw => "draw",
        }
    }

    fn play(&mut self, index: CellIndex) -> bool {
        self.engine.apply_move(index).has_update()
    }

    fn reset(&mut self) -> bool {
        let updated = self.engine.has_moves();
        self.engine.reset();
        updated
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Display> HasUpdate for Result<game::MoveOutcome, E> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::error!("move rejected: {}", err);
                false
            }
        }
    }
}

fn square_label(index: CellIndex, cell_state: ViewCellState) -> String {
    match cell_state.mark() {
        Some(mark) => format!("Square {}, {}", index + 1, mark),
        None => format!("Square {}, empty", index + 1),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(CellIndex),
    Reset,
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: CellIndex,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CellIndex>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    use ViewCellState::*;

    let SquareProps {
        index,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "square",
        match cell_state.mark() {
            Some(Mark::X) => classes!("square-x"),
            Some(Mark::O) => classes!("square-o"),
            None => classes!(),
        },
        matches!(cell_state, Winning(_)).then_some("square-win"),
    );
    let label = square_label(index, cell_state);
    let value = cell_state.mark().map_or("", Mark::symbol);

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button type="button" aria-label={label} {class} disabled={locked} {onclick}>
            <span class="square-value">{value}</span>
        </button>
    }
}

#[function_component(Header)]
fn header_component() -> Html {
    html! {
        <div class="header">
            <div class="brand">
                <div class="logo-dot" aria-hidden="true"/>
                <span class="brand-text">{"Ocean Tic Tac Toe"}</span>
            </div>
            <div class="subtext">{"A clean, modern take on a classic"}</div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct FooterProps {
    theme: Option<Theme>,
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Footer)]
fn footer_component(props: &FooterProps) -> Html {
    let next = Theme::next(props.theme);
    html! {
        <footer class="footer">
            <span>{"Built with "}<span class="accent">{"Rust"}</span>{" • Ocean Professional theme"}</span>
            <button
                type="button"
                class="btn-theme"
                onclick={props.on_toggle_theme.clone()}
                aria-label={Theme::switch_label(props.theme)}
            >
                {next.scheme()}
            </button>
        </footer>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ControlsProps {
    status: String,
    status_class: &'static str,
    can_reset: bool,
    on_reset: Callback<MouseEvent>,
}

#[function_component(Controls)]
fn controls_component(props: &ControlsProps) -> Html {
    let disabled = !props.can_reset;
    html! {
        <div class="controls">
            <div class={classes!("status", props.status_class)} role="status" aria-live="polite">
                {props.status.clone()}
            </div>
            <button
                type="button"
                class="btn-reset"
                onclick={props.on_reset.clone()}
                {disabled}
                aria-disabled={disabled.to_string()}
                aria-label="Reset game"
                title="Reset game"
            >
                {"Reset"}
            </button>
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a colour scheme for this page load
    #[arg(short, long, value_enum)]
    #[prop_or_default]
    pub theme: Option<Theme>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    theme: Option<Theme>,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: GameSession::new(),
            theme: Theme::init(ctx.props().theme),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => {
                if !self.session.is_playable() {
                    log::trace!("game over, ignoring square {}", index);
                    return false;
                }
                log::debug!("play square: {}", index);
                self.session.play(index)
            }
            Reset => {
                log::debug!("reset game");
                self.session.reset()
            }
            ToggleTheme => {
                let theme = Theme::next(self.theme);
                Theme::apply(Some(theme));
                self.theme = Some(theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let is_playable = self.session.is_playable();
        let callback = ctx.link().callback(Play);
        let on_reset = ctx.link().callback(|_: MouseEvent| Reset);
        let on_toggle_theme = ctx.link().callback(|_: MouseEvent| ToggleTheme);

        html! {
            <div class="ocean-app">
                <div class="bg-gradient"/>
                <main class="container">
                    <Header/>
                    <section class="game-card" aria-label="Tic Tac Toe board">
                        <div class="card-header">
                            <h1 class="card-title">{"Tic Tac Toe"}</h1>
                            <p class="card-subtitle">{"X vs O — take turns and align three to win."}</p>
                        </div>
                        <div class={classes!("board", is_playable.then_some("playable"))}>
                            {
                                for (0..game::BOARD_CELLS).map(|index| {
                                    let cell_state = self.session.cell_state_at(index);
                                    let locked = !self.session.can_play_at(index);
                                    let callback = callback.clone();
                                    html! {
                                        <SquareView key={index} {index} {cell_state} {locked} {callback}/>
                                    }
                                })
                            }
                        </div>
                        <Controls
                            status={self.session.status_text()}
                            status_class={self.session.status_class()}
                            can_reset={self.session.can_reset()}
                            {on_reset}
                        />
                    </section>
                    <Footer theme={self.theme} {on_toggle_theme}/>
                </main>
            </div>
        }
    }
}
