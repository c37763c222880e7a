use tracing::{debug, warn};

use crate::{
    components::{CrashEvent, CrashReason, GroundContact, StallState},
    engine::FlightDynamicsEngine,
    systems::{
        aerodynamics::{calculate_aero_forces, AeroForces, AirDataCalculation},
        attitude::{
            advance_heading, airborne_rate_derivatives, apply_auto_stability, apply_buffet,
            clamp_attitude, clamp_rates, control_effectiveness, integrate_euler, integrate_rates,
        },
        chute::update_drag_chute,
        gear::advance_landing_gear,
        ground::{
            apply_touchdown_damping, ground_longitudinal_accel, grounded_rate_derivatives,
            liftoff_accel, rolling_forces, rotation_authority, terrain_impact, touchdown_check,
            update_collision_warning,
        },
        propulsion::{drain_battery, spool_thrust, target_thrust, update_throttle},
    },
    utils::{
        deg_to_rad, heading_unit, meters_per_degree, rad_to_deg, AT_REST_SPEED, G_PENALTY_ONSET,
        MAX_FLIGHT_PATH_ANGLE, MIN_GAMMA_AIRSPEED, MIN_G_FORCE,
    },
};

/// Rate (1/s) at which a parked aircraft's pitch settles back to level.
const PARKED_PITCH_RELAXATION: f64 = 2.0;
/// Nose-down pitch below which a slow aircraft is diving rather than stalling (degrees).
const STALL_RECHECK_PITCH: f64 = -10.0;

/// Accelerations resolved along and normal to the flight path.
#[derive(Debug, Clone, Copy, Default)]
struct LinearAccel {
    along: f64,
    normal: f64,
    /// Grounded but with lift carrying the aircraft off the wheels.
    lifting_off: bool,
}

impl FlightDynamicsEngine {
    /// Advances the simulation by one frame.
    ///
    /// `dt` is clamped into the physics config's timestep range; non-finite or
    /// non-positive frames are skipped. Nothing happens while powered off or
    /// crashed.
    ///
    /// # Returns
    /// The crash event if the aircraft crashed during this tick.
    pub fn update(&mut self, dt: f64) -> Option<CrashEvent> {
        if !self.state.power.powered || self.state.is_crashed() {
            return None;
        }
        let dt = match self.physics.clamp_timestep(dt) {
            Some(step) => {
                if step != dt {
                    debug!("Clamped timestep {:.5} s to {:.5} s", dt, step);
                }
                step
            }
            None => {
                debug!("Skipping frame with timestep {}", dt);
                return None;
            }
        };
        self.state.sim_time += dt;

        if let Some(reason) = self.update_contact(dt) {
            return self.crash(reason);
        }
        self.update_engine(dt);
        let forces = self.update_aerodynamics();
        self.update_attitude(dt);
        let accel = self.update_linear_dynamics(&forces, dt);
        self.update_position(dt);
        self.update_altitude(&accel, dt);
        self.update_consumables(dt);

        if let Some(reason) = terrain_impact(self.state.ground.height_above_terrain) {
            return self.crash(reason);
        }
        None
    }

    /// Wheel contact, chute and gear progress, and the touchdown checks.
    fn update_contact(&mut self, dt: f64) -> Option<CrashReason> {
        let config = &self.config;
        let state = &mut self.state;

        state.refresh_height_above_terrain();
        let was_on_ground = state.ground.on_ground;
        let on_ground = GroundContact::wheels_in_contact(
            state.ground.height_above_terrain,
            config.ground.wheel_height,
        );
        state.ground.on_ground = on_ground;
        state.air_data.vertical_speed = state.air_data.climb_rate;
        state.ground.is_taxiing = on_ground && state.air_data.airspeed > AT_REST_SPEED;

        update_drag_chute(
            &mut state.chute,
            &state.ground,
            state.air_data.airspeed,
            &config.chute,
            dt,
        );
        advance_landing_gear(&mut state.gear, &config.gear, dt);

        if on_ground && !was_on_ground {
            state.ground.contact_time = 0.0;
            if let Some(reason) = touchdown_check(
                &state.attitude,
                state.air_data.vertical_speed,
                state.air_data.airspeed,
                &state.gear,
                &config.landing,
                config.ground.rotation_speed,
            ) {
                return Some(reason);
            }
            apply_touchdown_damping(&mut state.air_data, &config.landing);
        } else if on_ground {
            state.ground.contact_time += dt;
        }

        None
    }

    fn update_engine(&mut self, dt: f64) {
        let power = &mut self.state.power;
        if self.unrestricted {
            power.throttle = 100.0;
        } else {
            update_throttle(power, &self.config.propulsion, self.input.throttle, dt);
        }
        if power.battery <= 0.0 {
            power.throttle = 0.0;
        }
    }

    /// Air data, lift, drag and stall.
    fn update_aerodynamics(&mut self) -> AeroForces {
        let state = &mut self.state;
        let air = AirDataCalculation::calculate(
            state.air_data.airspeed,
            state.attitude.heading,
            state.attitude.pitch,
            state.air_data.flight_path_angle,
            state.position.height,
            &state.wind,
            &self.atmosphere,
        );
        let drag_scale = if self.unrestricted {
            self.physics.unrestricted.drag_scale
        } else {
            1.0
        };
        let forces = calculate_aero_forces(
            &air,
            state.ground.height_above_terrain,
            &self.config,
            &state.chute,
            drag_scale,
        );

        state.air_data.true_airspeed = air.true_airspeed;
        state.air_data.density = air.density;
        state.air_data.dynamic_pressure = air.dynamic_pressure;
        state.air_data.angle_of_attack = air.alpha_deg();
        state.loads.lift = forces.lift;
        state.loads.drag = forces.drag;
        state.stall = if state.ground.on_ground {
            StallState::clear()
        } else {
            forces.stall
        };

        forces
    }

    /// Spools thrust toward the throttle setting. Runs inside the linear dynamics
    /// step so the throttle for this tick is already settled.
    fn spooled_thrust(&self, dt: f64) -> f64 {
        if self.unrestricted {
            return self.physics.unrestricted.thrust;
        }
        let propulsion = &self.config.propulsion;
        let target = target_thrust(
            self.state.power.throttle_ratio(),
            self.state.air_data.true_airspeed,
            propulsion,
        );
        spool_thrust(self.state.loads.thrust, target, propulsion, dt)
    }

    /// Body rates, Euler angles and heading.
    fn update_attitude(&mut self, dt: f64) {
        let config = &self.config;
        let state = &mut self.state;
        let controls = &config.controls;

        let effectiveness = control_effectiveness(
            state.air_data.dynamic_pressure,
            controls,
            self.atmosphere.sea_level_density,
        );

        let derivatives = if state.ground.on_ground {
            let rotation = rotation_authority(
                state.air_data.airspeed,
                state.air_data.angle_of_attack,
                self.input.pitch,
                &config.ground,
                config.limits.g_force_speed_penalty,
            );
            state.air_data.airspeed = (state.air_data.airspeed - rotation.speed_bleed * dt).max(0.0);
            grounded_rate_derivatives(
                &self.input,
                &state.rates,
                &state.attitude,
                controls,
                &config.ground,
                rotation.authority,
                effectiveness,
            )
        } else {
            airborne_rate_derivatives(&self.input, &state.rates, controls, effectiveness)
        };

        integrate_rates(&mut state.rates, &derivatives, config.limits.max_angular_rate, dt);
        if !state.ground.on_ground {
            apply_buffet(&mut state.rates, &state.stall, controls, &mut self.rng, dt);
        }
        apply_auto_stability(
            &mut state.rates,
            &state.attitude,
            &self.input,
            state.air_data.flight_path_angle,
            config.aero_coef.lift.trim_aoa,
            controls,
            dt,
        );
        clamp_rates(&mut state.rates, config.limits.max_angular_rate);

        integrate_euler(&mut state.attitude, &state.rates, dt);
        clamp_attitude(&mut state.attitude, &config.limits);

        state.attitude.heading = advance_heading(
            state.attitude.heading,
            state.attitude.roll,
            state.rates.r,
            state.air_data.true_airspeed,
            config.limits.min_airspeed,
            self.physics.gravity,
            dt,
        );
    }

    /// Thrust, drag and gravity along the flight path, G loading and airspeed.
    fn update_linear_dynamics(&mut self, forces: &AeroForces, dt: f64) -> LinearAccel {
        let thrust = self.spooled_thrust(dt);
        let config = &self.config;
        let gravity = self.physics.gravity;
        let mass = config.mass.mass;
        let weight = config.mass.weight(gravity);
        let state = &mut self.state;
        state.loads.thrust = thrust;

        let accel = if state.ground.on_ground {
            let rolling = rolling_forces(
                mass,
                forces.lift,
                state.air_data.airspeed,
                state.power.throttle,
                &config.ground,
                gravity,
            );
            let along = ground_longitudinal_accel(thrust, forces.drag, mass, &rolling);
            let normal = liftoff_accel(
                forces.lift,
                mass,
                state.air_data.airspeed,
                &config.ground,
                gravity,
            );
            if state.air_data.airspeed < config.ground.rotation_speed {
                state.attitude.pitch *= 1.0 - PARKED_PITCH_RELAXATION * dt;
                state.air_data.flight_path_angle = 0.0;
            }
            state.position.height = state.ground.terrain_height + config.ground.wheel_height;
            LinearAccel {
                along,
                normal,
                lifting_off: normal > 0.0,
            }
        } else {
            let gamma = deg_to_rad(state.air_data.flight_path_angle);
            let phi = deg_to_rad(state.attitude.roll);
            LinearAccel {
                along: (thrust - forces.drag) / mass - gravity * gamma.sin(),
                normal: forces.lift * phi.cos() / mass - gravity * gamma.cos(),
                lifting_off: false,
            }
        };

        state.loads.load_factor = forces.lift / weight;
        state.loads.g_force = (accel.along / gravity)
            .hypot(state.loads.load_factor)
            .max(MIN_G_FORCE);
        state.stats.max_g = state.stats.max_g.max(state.loads.g_force);
        let over_g = state.loads.g_force > config.limits.structural_g_limit;
        if over_g && !state.loads.over_g {
            warn!(
                g_force = state.loads.g_force,
                limit = config.limits.structural_g_limit,
                "Structural load limit exceeded"
            );
        }
        state.loads.over_g = over_g;

        if !self.unrestricted && state.loads.g_force > G_PENALTY_ONSET {
            let penalty = (state.loads.g_force - G_PENALTY_ONSET) * config.limits.g_force_speed_penalty * dt;
            state.air_data.airspeed *= (1.0 - penalty).max(0.0);
        }

        let speed_limit = if self.unrestricted {
            self.physics.unrestricted.speed_limit
        } else {
            config.limits.max_airspeed
        };
        state.air_data.airspeed = (state.air_data.airspeed + accel.along * dt).clamp(0.0, speed_limit);

        if !self.unrestricted
            && !state.ground.on_ground
            && state.air_data.airspeed < config.limits.min_airspeed
            && state.attitude.pitch > STALL_RECHECK_PITCH
        {
            let deficit = (config.limits.min_airspeed - state.air_data.airspeed) / config.limits.min_airspeed;
            state.stall = StallState::stalled(state.stall.intensity.max(deficit));
        }

        let gamma_rate = accel.normal / state.air_data.airspeed.max(MIN_GAMMA_AIRSPEED);
        state.air_data.flight_path_angle = (state.air_data.flight_path_angle
            + rad_to_deg(gamma_rate * dt))
        .clamp(-MAX_FLIGHT_PATH_ANGLE, MAX_FLIGHT_PATH_ANGLE);

        state.stats.max_speed = state.stats.max_speed.max(state.air_data.airspeed);
        accel
    }

    /// Geodetic position from the horizontal ground-speed vector.
    fn update_position(&mut self, dt: f64) {
        let state = &mut self.state;
        let gamma = deg_to_rad(state.air_data.flight_path_angle);
        state.air_data.ground_speed = state.air_data.airspeed * gamma.cos();

        let direction = heading_unit(state.attitude.heading);
        let (lat_scale, lon_scale) = meters_per_degree(state.position.latitude);
        let east = state.air_data.ground_speed * direction.x;
        let north = state.air_data.ground_speed * direction.y;

        state.position.latitude = (state.position.latitude + north * dt / lat_scale).clamp(-90.0, 90.0);
        state.position.longitude += east * dt / lon_scale;
    }

    /// Climb rate, height and the ground/height floors.
    ///
    /// A grounded aircraft below walking pace comes to rest unless thrust is
    /// accelerating it.
    fn update_altitude(&mut self, accel: &LinearAccel, dt: f64) {
        let config = &self.config;
        let state = &mut self.state;
        let wheel_floor = state.ground.terrain_height + config.ground.wheel_height;

        if !state.ground.on_ground || accel.lifting_off {
            let gamma = deg_to_rad(state.air_data.flight_path_angle);
            state.air_data.climb_rate = state.air_data.airspeed * gamma.sin();
            state.position.height += state.air_data.climb_rate * dt;
            if state.position.height <= wheel_floor {
                state.position.height = wheel_floor;
            }
        } else {
            state.air_data.climb_rate = 0.0;
            state.air_data.flight_path_angle = 0.0;
            state.position.height = wheel_floor;
            if state.air_data.airspeed < AT_REST_SPEED && accel.along <= 0.0 {
                state.air_data.airspeed = 0.0;
                state.air_data.ground_speed = 0.0;
            }
        }

        state.position.height = state
            .position
            .height
            .clamp(config.limits.min_height, config.limits.max_height);
        state.refresh_height_above_terrain();
        update_collision_warning(&mut state.ground, &config.landing, false);
    }

    /// Battery drain and flight statistics.
    fn update_consumables(&mut self, dt: f64) {
        let state = &mut self.state;
        drain_battery(&mut state.power, &self.config.propulsion, dt);

        state.stats.total_distance += state.air_data.ground_speed.max(0.0) * dt;
        state.stats.max_altitude = state.stats.max_altitude.max(state.position.height);
    }
}
