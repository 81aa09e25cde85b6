// Skill-overlap matching: normalized skill sets, the overlap scorer,
// and the POST /api/match handler that decodes loosely-typed request bodies.

pub mod handlers;
pub mod scorer;
pub mod skills;
