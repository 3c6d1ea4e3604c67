#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use robotron_core::components::{Debris, FamilyMember};
    use robotron_core::constants::*;
    use robotron_core::enums::{EnemyVariant, Heading, SpriteKind};
    use robotron_core::input::{DirectionSet, MovementInput};
    use robotron_core::types::{Rect, Vec2};

    use crate::profiles::get_profile;
    use crate::{bullet, debris, enemy, family, player};

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    fn member(heading: Heading, timer: f32) -> FamilyMember {
        FamilyMember {
            heading,
            heading_timer_secs: timer,
            speed: FAMILY_SPEED,
        }
    }

    // ---- Profiles ----

    #[test]
    fn test_enemy_profiles() {
        let basic = get_profile(EnemyVariant::Basic);
        let electrode = get_profile(EnemyVariant::Electrode);
        let grunt = get_profile(EnemyVariant::Grunt);
        assert_eq!(basic.reward, 0);
        assert_eq!(electrode.reward, 100);
        assert_eq!(grunt.reward, 200);
        assert_eq!(electrode.speed, 0.0);
        assert_eq!(grunt.speed, 100.0);
        assert!(basic.speed > 0.0);
    }

    // ---- Player ----

    #[test]
    fn test_player_idle_does_not_move() {
        let pos = Vec2::new(10.0, 10.0);
        assert!(player::step(pos, &MovementInput::Idle, PLAYER_SPEED, 0.1).is_none());
        let cancelled = MovementInput::Directions(DirectionSet {
            up: true,
            down: true,
            ..Default::default()
        });
        assert!(player::step(pos, &cancelled, PLAYER_SPEED, 0.1).is_none());
    }

    #[test]
    fn test_player_axis_and_diagonal_same_speed() {
        let origin = Vec2::new(400.0, 400.0);
        let right = MovementInput::Directions(DirectionSet {
            right: true,
            ..Default::default()
        });
        let diag = MovementInput::Directions(DirectionSet {
            right: true,
            down: true,
            ..Default::default()
        });
        let a = player::step(origin, &right, PLAYER_SPEED, 0.1).unwrap();
        let b = player::step(origin, &diag, PLAYER_SPEED, 0.1).unwrap();
        assert!(approx(a, Vec2::new(425.0, 400.0)));
        assert!(((b - origin).length() - 25.0).abs() < 1e-3);
    }

    // ---- Enemies ----

    #[test]
    fn test_grunt_pursues_target() {
        let next = enemy::pursue(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), GRUNT_SPEED, 0.5);
        assert!(approx(next, Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn test_electrode_never_moves() {
        let pos = Vec2::new(30.0, 40.0);
        assert_eq!(
            enemy::pursue(pos, Vec2::new(500.0, 500.0), ELECTRODE_SPEED, 1.0),
            pos
        );
    }

    #[test]
    fn test_pursuit_on_target_skips_motion() {
        let pos = Vec2::new(30.0, 40.0);
        let next = enemy::pursue(pos, pos, GRUNT_SPEED, 1.0);
        assert_eq!(next, pos);
        assert!(next.is_finite());
    }

    // ---- Bullets ----

    #[test]
    fn test_bullet_footprint_follows_direction() {
        let (sprite, w, h) = bullet::footprint(Vec2::X);
        assert_eq!(sprite.kind, SpriteKind::Bullet);
        assert_eq!((w, h), (BULLET_LENGTH, BULLET_WIDTH));

        let (sprite, w, h) = bullet::footprint(Vec2::NEG_Y);
        assert!((sprite.angle_deg - 90.0).abs() < 1e-3);
        assert_eq!((w, h), (BULLET_WIDTH, BULLET_LENGTH));
    }

    #[test]
    fn test_bullet_advance() {
        let p = bullet::advance(Vec2::new(400.0, 400.0), Vec2::X, BULLET_SPEED, 0.1);
        assert!(approx(p, Vec2::new(500.0, 400.0)));
    }

    #[test]
    fn test_bullet_left_screen() {
        let screen = Rect::new(0, 0, 800, 800);
        assert!(!bullet::has_left_screen(&Rect::new(790, 10, 32, 8), &screen));
        assert!(bullet::has_left_screen(&Rect::new(800, 10, 32, 8), &screen));
    }

    #[test]
    fn test_first_hit_returns_single_unclaimed_target() {
        let bounds = Rect::new(100, 100, 32, 8);
        let targets = [
            (1u32, Rect::new(0, 0, 10, 10)),
            (2u32, Rect::new(110, 96, 32, 32)),
            (3u32, Rect::new(105, 90, 32, 32)),
        ];
        let hit = bullet::first_hit(&bounds, &targets, |_| false);
        assert_eq!(hit, Some(2));

        let claimed: HashSet<u32> = [2].into_iter().collect();
        let hit = bullet::first_hit(&bounds, &targets, |id| claimed.contains(id));
        assert_eq!(hit, Some(3));

        let all: HashSet<u32> = [2, 3].into_iter().collect();
        assert_eq!(bullet::first_hit(&bounds, &targets, |id| all.contains(id)), None);
    }

    // ---- Family ----

    #[test]
    fn test_family_holds_heading_until_timer_expires() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut m = member(Heading::Right, 1.0);
        let (pos, redrawn) = family::wander(&mut m, Vec2::new(100.0, 100.0), 0.5, &mut rng);
        assert!(!redrawn);
        assert_eq!(m.heading, Heading::Right);
        assert!(approx(pos, Vec2::new(125.0, 100.0)));
        assert!((m.heading_timer_secs - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_family_redraws_heading_and_resets_timer() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut m = member(Heading::Hold, 0.01);
        let (_, redrawn) = family::wander(&mut m, Vec2::ZERO, 0.02, &mut rng);
        assert!(redrawn);
        assert!(m.heading_timer_secs >= FAMILY_HEADING_SECS);
        assert!(m.heading_timer_secs <= FAMILY_HEADING_SECS + FAMILY_HEADING_JITTER_SECS);
    }

    #[test]
    fn test_family_heading_draw_covers_all_choices() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let seen: HashSet<Heading> = (0..500).map(|_| family::random_heading(&mut rng)).collect();
        assert_eq!(seen.len(), Heading::ALL.len());
    }

    #[test]
    fn test_family_periods_desynchronize() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let periods: Vec<f32> = (0..20).map(|_| family::next_heading_period(&mut rng)).collect();
        let first = periods[0];
        assert!(periods.iter().any(|p| (p - first).abs() > 1e-6));
    }

    // ---- Debris ----

    #[test]
    fn test_debris_moves_and_expires() {
        let mut d = Debris {
            velocity: Vec2::new(0.0, 150.0),
            lifetime_secs: DEBRIS_LIFETIME_SECS,
        };
        let p = debris::advance(&mut d, Vec2::new(50.0, 50.0), 0.2);
        assert!(approx(p, Vec2::new(50.0, 80.0)));
        assert!(!debris::is_expired(&d));
        debris::advance(&mut d, p, 0.2);
        assert!(!debris::is_expired(&d));
        debris::advance(&mut d, p, 0.2);
        assert!(debris::is_expired(&d));
    }
}
