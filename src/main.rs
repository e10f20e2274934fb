use lights_out::{
    Flow, Game, Settings,
    domain::Grid,
    input, rendering, ui,
};
use log::error;
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;

fn window_conf() -> Conf {
    Conf {
        window_title: "Lights Out".to_owned(),
        window_width: 900,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::from_env();
    let rng = settings.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut game = match Game::new(rng, &settings) {
        Ok(game) => game,
        Err(err) => {
            error!("Could not start a session: {}", err);
            return;
        }
    };

    loop {
        let mouse_pos = mouse_position();

        // Recreate layout every frame so resizing just works
        let (rows, columns) = game.session().grid().map_or((1, 1), Grid::dimensions);
        let view = ui::board_view(rows, columns);
        let buttons = ui::create_buttons(game.session().phase());

        let mut quit = false;
        for command in input::poll_commands(&buttons, &view, mouse_pos) {
            if game.handle(command) == Flow::Quit {
                quit = true;
            }
        }
        if quit {
            break;
        }

        clear_background(Color::from_rgba(12, 14, 28, 255));
        if let Some(grid) = game.session().grid() {
            rendering::draw_board(grid, &view);
        }
        rendering::draw_panel(game.session(), &buttons, mouse_pos);

        next_frame().await;
    }
}
