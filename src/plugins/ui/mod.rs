//! HUD and game-over overlay.
//!
//! Three text lines in the top-left corner mirror the `Session`; the overlay is
//! spawned hidden and toggled by the state machine.

use bevy::prelude::*;

use crate::common::session::Session;
use crate::common::state::GameState;

const HUD_FONT_SIZE: f32 = 20.0;
const HUD_LEFT: f32 = 10.0;
const OVERLAY_TEXT: &str = "GAME OVER\nClick to Restart";

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudLine {
    Score,
    Health,
    Gun,
}

impl HudLine {
    const ALL: [HudLine; 3] = [HudLine::Score, HudLine::Health, HudLine::Gun];

    fn top(self) -> f32 {
        match self {
            HudLine::Score => 10.0,
            HudLine::Health => 35.0,
            HudLine::Gun => 60.0,
        }
    }

    pub fn render(self, session: &Session) -> String {
        match self {
            HudLine::Score => format!("Score: {}", session.score()),
            HudLine::Health => format!("Health: {}", session.health()),
            HudLine::Gun => format!("Gun: {}", session.arsenal.tier().name),
        }
    }
}

#[derive(Component, Debug)]
pub struct GameOverOverlay;

pub fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_hud, spawn_overlay))
        .add_systems(Update, refresh_hud.run_if(resource_changed::<Session>))
        .add_systems(OnEnter(GameState::GameOver), show_overlay)
        .add_systems(OnExit(GameState::GameOver), hide_overlay);
}

fn spawn_hud(mut commands: Commands, session: Res<Session>) {
    for line in HudLine::ALL {
        commands.spawn((
            Name::new(format!("Hud{line:?}")),
            Text::new(line.render(&session)),
            TextFont {
                font_size: HUD_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_LEFT),
                top: Val::Px(line.top()),
                ..default()
            },
            line,
        ));
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        Name::new("GameOverOverlay"),
        Text::new(OVERLAY_TEXT),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(Color::WHITE),
        TextLayout::new_with_justify(bevy::text::Justify::Center),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(42.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        Visibility::Hidden,
        GameOverOverlay,
    ));
}

fn refresh_hud(session: Res<Session>, mut q: Query<(&HudLine, &mut Text)>) {
    for (line, mut text) in &mut q {
        let next = line.render(&session);
        if text.0 != next {
            text.0 = next;
        }
    }
}

fn set_overlay(q: &mut Query<&mut Visibility, With<GameOverOverlay>>, vis: Visibility) {
    for mut v in q.iter_mut() {
        *v = vis;
    }
}

fn show_overlay(mut q: Query<&mut Visibility, With<GameOverOverlay>>) {
    set_overlay(&mut q, Visibility::Visible);
}

fn hide_overlay(mut q: Query<&mut Visibility, With<GameOverOverlay>>) {
    set_overlay(&mut q, Visibility::Hidden);
}
