use crate::store::LocalBestTime;
use crate::utils::*;
use bitflags::bitflags;
use flagfall_core as game;
use game::{CellView, EngineState, Epoch, GameConfig, Seconds, Session, TickSource};
use gloo::timers::callback::Interval;
use yew::prelude::*;

pub const TICK_MILLIS: u32 = 1000;

/// Browser tick source, one gloo interval per game. Dropping the interval clears it.
pub struct IntervalTicks {
    on_tick: Callback<Epoch>,
}

impl IntervalTicks {
    pub fn new(on_tick: Callback<Epoch>) -> Self {
        Self { on_tick }
    }
}

impl TickSource for IntervalTicks {
    type Task = Interval;

    fn start(&mut self, epoch: Epoch) -> Self::Task {
        let on_tick = self.on_tick.clone();
        Interval::new(TICK_MILLIS, move || on_tick.emit(epoch))
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
        const BACK    = 1 << 3;
        const FORWARD = 1 << 4;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellPointerState {
    pos: game::Coord2,
    buttons: MouseButtons,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Update(CellPointerState),
    Leave,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    Tick(Epoch),
    Restart,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum CellAction {
    Reveal(game::Coord2),
    ToggleFlag(game::Coord2),
    Cancel,
}

/// A release redraws when the move changed the board, or when it lifts the pressed-cell highlight.
fn release_redraws(held: CellPointerState, moved: bool) -> bool {
    moved || held.buttons == MouseButtons::LEFT
}

/// Which move a full button release completes, given what was held before it.
fn released_action(held: CellPointerState) -> CellAction {
    match held.buttons {
        MouseButtons::LEFT => CellAction::Reveal(held.pos),
        MouseButtons::RIGHT => CellAction::ToggleFlag(held.pos),
        // several buttons at once, treat as a cancel
        _ => CellAction::Cancel,
    }
}

fn cell_label(cell: CellView) -> String {
    match cell {
        CellView::Hidden | CellView::Revealed(0) => String::new(),
        CellView::Flagged => "🚩".to_string(),
        CellView::Revealed(count) => count.to_string(),
        CellView::Mine | CellView::TriggeredMine => "💣".to_string(),
    }
}

fn elapsed_text(secs: Seconds) -> String {
    format!("Time Elapsed: {} seconds", secs)
}

fn fastest_time_text(best: Option<Seconds>) -> String {
    match best {
        Some(secs) => format!("Fastest Time: {} seconds", secs),
        None => "Fastest Time: N/A".to_string(),
    }
}

fn outcome_text(state: EngineState) -> Option<&'static str> {
    match state {
        EngineState::Active => None,
        EngineState::Won => Some("Congratulations! You Win!"),
        EngineState::Lost => Some("Game Over!"),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    cell: CellView,
    #[prop_or_default]
    pressed: bool,
    callback: Callback<CellMsg>,
}

#[function_component(CellTile)]
fn cell_component(props: &CellProps) -> Html {
    use CellView::*;

    let CellProps {
        row,
        col,
        cell,
        pressed,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell {
            Hidden => classes!(),
            Revealed(count) => classes!("revealed", format!("num-{}", count)),
            Flagged => classes!("flag"),
            TriggeredMine => classes!("revealed", "mine", "oops"),
            Mine => classes!("revealed", "mine"),
        }
    );
    if pressed {
        class.push("pressed");
    }

    let pointer = |name: &'static str| {
        let callback = callback.clone();
        Callback::from(move |e: MouseEvent| {
            let buttons = MouseButtons::from_bits_truncate(e.buttons());
            let pointer_state = CellPointerState {
                pos: (row, col),
                buttons,
            };
            callback.emit(CellMsg::Update(pointer_state));
            log::trace!("({}, {}) mouse {} ({:?})", row, col, name, buttons);
        })
    };
    let onmousedown = pointer("down");
    let onmouseup = pointer("up");
    let onmouseenter = pointer("enter");

    let onmouseleave = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            callback.emit(CellMsg::Leave);
            log::trace!("({}, {}) mouse leave", row, col);
        })
    };

    html! {
        <td {class} {onmousedown} {onmouseup} {onmouseenter} {onmouseleave}>
            {cell_label(cell)}
        </td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    /// Forced seed, random when absent
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    session: Session<LocalBestTime, IntervalTicks>,
    current_cell_state: Option<CellPointerState>,
}

impl GameView {
    fn apply(&mut self, action: CellAction) -> bool {
        match action {
            CellAction::Reveal(pos) => {
                log::debug!("reveal cell: {:?}", pos);
                self.session.reveal(pos).has_update()
            }
            CellAction::ToggleFlag(pos) => {
                log::debug!("toggle flag: {:?}", pos);
                self.session.toggle_flag(pos).has_update()
            }
            CellAction::Cancel => false,
        }
    }

    fn is_pressed(&self, coords: game::Coord2, cell: CellView) -> bool {
        !self.session.is_over()
            && cell == CellView::Hidden
            && self.current_cell_state
                == Some(CellPointerState {
                    pos: coords,
                    buttons: MouseButtons::LEFT,
                })
    }

    fn state_class(&self, state: EngineState) -> &'static str {
        let mid_open = matches!(
            self.current_cell_state,
            Some(CellPointerState {
                buttons: MouseButtons::LEFT,
                ..
            })
        );
        match state {
            EngineState::Active if mid_open => "mid-open",
            EngineState::Active => "in-progress",
            EngineState::Won => "win",
            EngineState::Lost => "lose",
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("starting {:?} with seed {}", config, seed);

        let ticks = IntervalTicks::new(ctx.link().callback(Msg::Tick));
        Self {
            session: Session::new(config, seed, LocalBestTime, ticks),
            current_cell_state: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use CellMsg::*;
        use Msg::*;

        match msg {
            CellEvent(Leave) => self.current_cell_state.take().is_some(),
            CellEvent(Update(cell_state)) => {
                if cell_state.buttons.is_empty() {
                    match self.current_cell_state.take() {
                        // mouse is just moving unpressed
                        None => false,
                        Some(held) => {
                            let moved = self.apply(released_action(held));
                            release_redraws(held, moved)
                        }
                    }
                } else {
                    self.current_cell_state.replace(cell_state) != Some(cell_state)
                }
            }
            Tick(epoch) => self.session.tick(epoch),
            Restart => self.session.restart(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.session.view();
        let size = view.size;
        let state_class = self.state_class(view.state);
        let mines_left = format_for_counter(view.mines_left);
        let elapsed = format_for_counter(i32::try_from(view.elapsed_secs).unwrap_or(i32::MAX));

        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <div class="flagfall" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <aside>{mines_left}</aside>
                    <span><button id="restart-button" class={state_class} onclick={cb_restart}>{"🔄 Restart"}</button></span>
                    <aside>{elapsed}</aside>
                </nav>
                <div id="timer">{elapsed_text(view.elapsed_secs)}</div>
                <div id="fastest-time">{fastest_time_text(view.best_time_secs)}</div>
                <table id="game-board" class={(!view.is_over()).then_some("playable")}>
                    {
                        for (0..size).map(|row| html! {
                            <tr>
                                {
                                    for (0..size).map(|col| {
                                        let cell = view.cell_at((row, col));
                                        let pressed = self.is_pressed((row, col), cell);
                                        let callback = ctx.link().callback(Msg::CellEvent);
                                        html! {
                                            <CellTile {row} {col} {cell} {pressed} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                {
                    if let Some(text) = outcome_text(view.state) {
                        html! { <p class={classes!("outcome", state_class)}>{text}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
