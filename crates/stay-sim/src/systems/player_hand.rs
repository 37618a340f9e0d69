//! Player hand controller.
//!
//! Velocity eases toward the input direction at full speed, position
//! integrates, and a ceiling keeps the hand below `max_y`. Disabled hands stop
//! dead and ignore input. Movement sounds are rate-limited by time, speed and
//! distance travelled.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use stay_core::components::{MoveInput, PlayerHand, Position, Velocity};
use stay_core::config::PlayerHandConfig;
use stay_core::constants::MOVEMENT_SOUND_MIN_DISPLACEMENT;

use crate::cues::{CueChoice, CuePicker};

/// Run one fixed step for every player hand. Chosen movement cues are appended to `cues`.
pub fn run(
    world: &mut World,
    dt: f32,
    time: f32,
    config: &PlayerHandConfig,
    sounds: &CuePicker,
    rng: &mut ChaCha8Rng,
    cues: &mut Vec<CueChoice>,
) {
    for (_entity, (pos, vel, hand, input)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut PlayerHand, &MoveInput)>()
    {
        if !hand.movement_enabled {
            vel.0 = Vec2::ZERO;
            hand.current_speed = 0.0;
            continue;
        }

        let direction = input.0.normalize_or_zero();
        let blend = (hand.smoothing * dt * 60.0).clamp(0.0, 1.0);
        vel.0 = vel.0.lerp(direction * hand.speed, blend);
        pos.0 += vel.0 * dt;

        if pos.0.y > hand.max_y {
            pos.0.y = hand.max_y;
            if vel.0.y > 0.0 {
                vel.0.y = 0.0;
            }
        }
        hand.current_speed = vel.0.length();

        let moved = pos.0.distance(hand.last_sound_position);
        if hand.current_speed >= config.min_speed_for_sound
            && moved > MOVEMENT_SOUND_MIN_DISPLACEMENT
            && time - hand.last_sound_time >= config.sound_cooldown
            && !sounds.is_empty()
        {
            if let Some(choice) = sounds.pick(rng) {
                trace!(cue = %choice.id, speed = hand.current_speed, "movement sound");
                cues.push(choice);
            }
            hand.last_sound_time = time;
        }
        hand.last_sound_position = pos.0;
    }
}
