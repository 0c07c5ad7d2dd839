/// Sample posting offered to users who want to try the analyzer without their own.
pub const SAMPLE_JOB_DESCRIPTION: &str = "We are looking for a Senior Software Engineer to join our dynamic team. The ideal candidate will have:

• 5+ years of experience in full-stack development
• Proficiency in React, Node.js, and TypeScript
• Experience with cloud platforms (AWS, Azure, or GCP)
• Strong knowledge of databases (SQL and NoSQL)
• Experience with containerization (Docker, Kubernetes)
• Excellent problem-solving and communication skills
• Bachelor's degree in Computer Science or related field

Responsibilities include developing scalable web applications, collaborating with cross-functional teams, and mentoring junior developers.";
