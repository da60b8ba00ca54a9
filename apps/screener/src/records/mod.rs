// Resume and job description intake. Resumes arrive already extracted;
// document upload and parsing happen upstream.

pub mod handlers;
