pub mod team;
pub mod user;

/*
 A user is either a manager or an employee; the role is fixed at creation.
 Managers own teams (team.manager_id), employees optionally belong to one
 (user.team_id). "Employees of team X" is always derived from user.team_id,
 never stored on the team row.
 */
