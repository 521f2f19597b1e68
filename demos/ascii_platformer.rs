use tile_physics::{
    debug::{DebugColor, DebugDrawFlags, DebugRenderer},
    sync::{run_frame, Kinematics, PhysicsEntity},
    tiles::{TileData, TileMap},
    BodyHandle, BodyOwner, Circle, CollisionType, EntityId, PhysicsBody, Rect, Space, Vector2,
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use std::thread::sleep;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    terminal::{Clear, ClearType},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, SetForegroundColor, ResetColor},
};

const FRAME_DURATION: Duration = Duration::from_millis(16); // ~60 FPS
const TOTAL_FRAMES: u32 = 900;
const TILE_SIZE: f32 = 16.0;
const GRAVITY: f32 = 700.0;
const RUN_SPEED: f32 = 90.0;
const JUMP_SPEED: f32 = 330.0;

// '#' solid, '=' one-way platform, '.' air
const LEVEL: [&str; 12] = [
    "########################################",
    "#......................................#",
    "#......................................#",
    "#..........=====..............====.....#",
    "#......................................#",
    "#....====...........######.............#",
    "#.......................#.......====...#",
    "#..............====.....#..............#",
    "#.......................#..............#",
    "#.....##................#.......##.....#",
    "#.....##.........................#.....#",
    "########################################",
];

/// A player that runs back and forth and jumps whenever it lands
struct Runner {
    id: EntityId,
    body: BodyHandle,
    position: Vector2,
    velocity: Vector2,
    acceleration: Vector2,
    grounded: bool,
    direction: f32,
    jumps: u32,
}

impl Runner {
    fn think(&mut self) {
        // A wall zeroed our horizontal speed last frame
        if self.velocity.x == 0.0 && self.grounded {
            self.direction = -self.direction;
        }

        self.velocity.x = RUN_SPEED * self.direction;
        if self.grounded {
            self.velocity.y = -JUMP_SPEED;
            self.jumps += 1;
        }
        self.acceleration = Vector2::new(0.0, GRAVITY);
    }
}

impl PhysicsEntity for Runner {
    fn entity_id(&self) -> EntityId {
        self.id
    }

    fn body_handle(&self) -> Option<BodyHandle> {
        Some(self.body)
    }

    fn kinematics(&self) -> Kinematics {
        Kinematics {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
        }
    }

    fn apply_kinematics(&mut self, kinematics: Kinematics, grounded: bool) {
        self.position = kinematics.position;
        self.velocity = kinematics.velocity;
        self.acceleration = kinematics.acceleration;
        self.grounded = grounded;
    }
}

impl BodyOwner for Runner {}

/// Rasterizes debug shapes into a character grid, one cell per tile
struct TerminalCanvas {
    width: usize,
    height: usize,
    cells: Vec<(char, Color)>,
}

impl TerminalCanvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Color::Reset); width * height],
        }
    }

    fn clear(&mut self) {
        self.cells.fill((' ', Color::Reset));
    }

    fn fill(&mut self, bounds: Rect, glyph: char, color: Color) {
        let x0 = (bounds.x / TILE_SIZE).floor().max(0.0) as usize;
        let y0 = (bounds.y / TILE_SIZE).floor().max(0.0) as usize;
        let x1 = ((bounds.right() / TILE_SIZE).ceil() as usize).min(self.width);
        let y1 = ((bounds.bottom() / TILE_SIZE).ceil() as usize).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                self.cells[y * self.width + x] = (glyph, color);
            }
        }
    }

    fn present(&self, stdout: &mut std::io::Stdout) -> Result<(), std::io::Error> {
        for y in 0..self.height {
            stdout.queue(MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let (glyph, color) = self.cells[y * self.width + x];
                stdout.queue(SetForegroundColor(color))?
                      .queue(Print(glyph))?;
            }
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }
}

impl DebugRenderer for TerminalCanvas {
    fn draw_rect(&mut self, rect: Rect, color: DebugColor) {
        match color {
            // Thin one-way platforms only cover the top of their cell
            DebugColor::Orange if rect.h < TILE_SIZE => self.fill(rect, '▔', Color::DarkYellow),
            DebugColor::Orange => self.fill(rect, '█', Color::DarkYellow),
            DebugColor::Red => self.fill(rect, '@', Color::Red),
            DebugColor::Yellow => self.fill(rect, '+', Color::Yellow),
        }
    }

    fn draw_circle(&mut self, circle: Circle, color: DebugColor) {
        self.draw_rect(circle.bounds(), color);
    }
}

fn build_level() -> TileMap {
    let tileset = vec![
        TileData {
            frame: 0,
            collision_type: CollisionType::Full,
            collision_box: Vector2::new(TILE_SIZE, TILE_SIZE),
        },
        TileData {
            frame: 1,
            collision_type: CollisionType::OneWay,
            collision_box: Vector2::new(TILE_SIZE, 4.0),
        },
    ];

    let tiles = LEVEL
        .iter()
        .flat_map(|row| row.chars())
        .map(|c| match c {
            '#' => 1,
            '=' => 2,
            _ => 0,
        })
        .collect();

    TileMap {
        tile_size: Vector2::new(TILE_SIZE, TILE_SIZE),
        columns: LEVEL[0].len(),
        rows: LEVEL.len(),
        tileset,
        tiles,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Build the space from the tile map
    let level = build_level();
    let mut space = Space::new();
    let statics = level.populate_space(&mut space)?;
    log::info!("level loaded with {} static bodies", statics);

    // Spawn the runner standing on the floor
    let spawn = Vector2::new(3.0 * TILE_SIZE, 10.0 * TILE_SIZE);
    let body = space.spawn_body(
        PhysicsBody::new(spawn, Rect::new(-6.0, -14.0, 12.0, 14.0)).with_owner(EntityId(1)),
    );
    let mut runners = vec![Runner {
        id: EntityId(1),
        body,
        position: spawn,
        velocity: Vector2::zero(),
        acceleration: Vector2::zero(),
        grounded: false,
        direction: 1.0,
        jumps: 0,
    }];

    // Initialize terminal
    let mut stdout = stdout();
    stdout.execute(Hide)?;
    stdout.execute(Clear(ClearType::All))?;

    let mut canvas = TerminalCanvas::new(level.columns, level.rows);
    let mut frame_time = Instant::now();

    for _ in 0..TOTAL_FRAMES {
        for runner in runners.iter_mut() {
            runner.think();
        }
        run_frame(&mut space, &mut runners)?;

        canvas.clear();
        space.debug_draw(&mut canvas, Vector2::zero(), DebugDrawFlags::default());
        canvas.present(&mut stdout)?;

        let runner = &runners[0];
        stdout.queue(MoveTo(0, level.rows as u16 + 1))?
              .queue(Print(format!(
                  "pos=({:.1},{:.1}) vel=({:.1},{:.1}) grounded={} jumps={}    ",
                  runner.position.x,
                  runner.position.y,
                  runner.velocity.x,
                  runner.velocity.y,
                  runner.grounded,
                  runner.jumps
              )))?;
        stdout.flush()?;

        // Timing control
        let elapsed = frame_time.elapsed();
        if elapsed < FRAME_DURATION {
            sleep(FRAME_DURATION - elapsed);
        }
        frame_time = Instant::now();
    }

    // Clean up
    stdout.execute(Show)?;
    stdout.execute(MoveTo(0, level.rows as u16 + 2))?;

    Ok(())
}
