/// System instruction sent with every CV analysis request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional recruiter analyzing resumes.";

const TASKS: &str = "\
You are an expert AI recruiter analyzing a candidate's CV in IT, software engineering, data analytics and computer science fields.

1. Identify and categorize the candidate's experience into fields (e.g., Software Engineering, Lecturer, Business, Finance).
2. Suggest the main two areas of the candidate's expertise and the most relevant job roles based on the experience.
3. Provide recommendations for improving the CV in three bullet points.";

pub fn build_prompt(cv_text: &str) -> String {
    format!("{TASKS}\n\nCV Text:\n{cv_text}\n")
}
