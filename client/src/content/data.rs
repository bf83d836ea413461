use super::{
    Achievement, Certificate, Education, Profile, Project, SkillCategory, SocialLink, Training, TrainingTool,
};

pub const PROFILE: Profile = Profile {
    name: "Garv Kapoor",
    role: "AI/ML Enthusiast",
    traits: &["Driven", "Tech-Savvy", "Learner"],
    headline_skills: &["Python", "C++", "AWS", "Kubernetes", "Docker"],
    tagline: "I build exceptional digital experiences that are fast, accessible, and visually appealing.",
    email: "kapoorgarv123@gmail.com",
    social: &[
        SocialLink { label: "LinkedIn", href: "https://linkedin.com/in/garvkapoor/" },
        SocialLink { label: "GitHub", href: "https://github.com/garvkapoor7" },
        SocialLink { label: "LeetCode", href: "https://leetcode.com/u/garvkapoor7/" },
    ],
    resume_href: "/cv.pdf",
    resume_preview: "/cvpreview.png",
};

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { title: "Languages", skills: &["Python", "C++", "HTML", "CSS"] },
    SkillCategory {
        title: "Tools and Libraries",
        skills: &["Git", "GitHub", "Jupyter", "Scikit-learn", "Pandas", "NumPy", "AWS"],
    },
    SkillCategory {
        title: "Soft Skills",
        skills: &["Leadership", "Event Management", "Problem Solving", "Time Management", "Team Collaboration"],
    },
];

pub const TRAINING: &[Training] = &[Training {
    title: "AI/ML Summer Training",
    organization: "IBM",
    duration: "Jun 2024 - Jul 2024",
    location: "Remote",
    highlights: &[
        "Data Manipulation: Transformed and filtered data using pandas and numpy",
        "Data Visualization: Created insightful visualizations using Matplotlib and Seaborn",
        "Feature Extraction: Utilized TfidVectorizer for text-to-numerical conversion",
        "Predictive Modeling: Implemented ML models on Kaggle datasets",
    ],
    tools: &[
        TrainingTool { name: "Pandas", category: "Data Processing" },
        TrainingTool { name: "NumPy", category: "Data Processing" },
        TrainingTool { name: "Matplotlib", category: "Visualization" },
        TrainingTool { name: "Seaborn", category: "Visualization" },
        TrainingTool { name: "Scikit-learn", category: "Machine Learning" },
        TrainingTool { name: "NLTK", category: "NLP" },
        TrainingTool { name: "TfidVectorizer", category: "NLP" },
        TrainingTool { name: "WordCloud", category: "Visualization" },
    ],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Movie Review Sentiment Analysis",
        description: "A machine learning model that analyzes movie reviews and predicts sentiment (positive/negative) using Natural Language Processing.",
        date: "Mar 2024",
        technologies: &["Python", "NLTK", "Scikit-learn", "TensorFlow", "Pandas"],
        image: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?q=80&w=1074&auto=format&fit=crop",
        repository: "https://github.com/garvkapoor7/MovieReviewSentimentAnalysisbygarv/tree/main/movie_sentiment_analysis",
        live: "https://movie-sentiment-analysis-bygarv.netlify.app/",
    },
    Project {
        title: "Adaptica - Adaptive Learning Platform",
        description: "A personalized learning platform that adapts to individual learning styles and pace.",
        date: "Jan 2024 - Present",
        technologies: &["React", "Node.js", "TypeScript", "TensorFlow.js", "MongoDB"],
        image: "https://images.unsplash.com/photo-1571260899304-425eee4c7efc?q=80&w=1170&auto=format&fit=crop",
        repository: "https://github.com/garvkapoor7/Adaptica_project",
        live: "https://adaptica.netlify.app/",
    },
    Project {
        title: "Credit Card Fraud Detection Model",
        description: "Machine learning model to detect fraudulent credit card transactions",
        date: "Dec 2023",
        technologies: &["Python", "Scikit-learn", "Pandas", "TensorFlow", "Jupyter"],
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?q=80&w=1170&auto=format&fit=crop",
        repository: "https://github.com/garvkapoor7/CreDIT-card-Fraud-detection",
        live: "https://fraud-detection.vercel.app",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "IIT Madras",
        degree: "BS in Data Science",
        location: "Chennai",
        duration: "2024 - 2027",
        details: &["CGPA: 7.5", "Data Science and Applications"],
        image: "https://images.shiksha.com/mediadata/images/articles/1660288115phpbp5cCG.jpeg",
        website: "https://www.iitm.ac.in/",
    },
    Education {
        institution: "Lovely Professional University",
        degree: "B.Tech CSE",
        location: "Punjab",
        duration: "2022 - 2026",
        details: &["CGPA: 6.80", "AI & ML", "Tech Communities"],
        image: "https://idealcareer.in/wp-content/uploads/2020/12/en-news-18554188-LPU-campus.jpg.webp",
        website: "https://www.lpu.in/",
    },
    Education {
        institution: "RPS International School",
        degree: "Class 12",
        location: "Rajasthan",
        duration: "2020 - 2021",
        details: &["75%"],
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTftm4f_KT_ZEIDP4T1JozKyrv4ClVM-cqT9g&s",
        website: "https://rpsbehror.edu.in/",
    },
    Education {
        institution: "Raath International School",
        degree: "Class 10",
        location: "Rajasthan",
        duration: "2018 - 2019",
        details: &["89%"],
        image: "https://raathinternationalschoolsgroup.com/Assets/images/gallery/Behror.jpeg",
        website: "https://www.raathinternationalschool.com/",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Prompt Engineering for ChatGPT",
        organization: "Coursera",
        date: "Feb 2024",
        description: "Mastered advanced prompt engineering techniques for optimal AI interactions",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?q=80&w=1932&auto=format&fit=crop",
        preview: "/promptgpt.png",
    },
    Certificate {
        title: "Generative AI with Large Language Models",
        organization: "Coursera",
        date: "Mar 2024",
        description: "Explored cutting-edge LLM architectures and applications",
        image: "https://images.unsplash.com/photo-1702763973490-3b2d40c6ff03?q=80&w=1932&auto=format&fit=crop",
        preview: "/genAI.png",
    },
    Certificate {
        title: "Dynamic Programming & Greedy Algorithms",
        organization: "GeeksforGeeks",
        date: "Jan 2024",
        description: "Advanced algorithmic problem-solving techniques and optimization",
        image: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?q=80&w=1932&auto=format&fit=crop",
        preview: "/Dynamic programming, Greedy Algorythms_page-0001.jpg",
    },
    Certificate {
        title: "ChatGPT Advanced Data Analysis",
        organization: "Coursera",
        date: "Feb 2024",
        description: "Advanced data analysis techniques using ChatGPT",
        image: "https://images.unsplash.com/photo-1555949963-aa79dcee981c?q=80&w=1932&auto=format&fit=crop",
        preview: "/ChatGPT Advance Data Analysis_page-0001.jpg",
    },
    Certificate {
        title: "Build AI Apps with ChatGPT, DALL-E & GPT-4",
        organization: "Udemy",
        date: "Jan 2024",
        description: "Building advanced AI applications using OpenAI technologies",
        image: "https://images.unsplash.com/photo-1526379879527-8559ecfcaec0?q=80&w=1932&auto=format&fit=crop",
        preview: "/Build AI App with ChatGpt ,DALL-E,GPT-4_page-0001.jpg",
    },
    Certificate {
        title: "Generative AI Primer",
        organization: "Coursera",
        date: "Dec 2023",
        description: "Fundamentals and applications of Generative AI technologies",
        image: "https://images.unsplash.com/photo-1547658719-da2b51169166?q=80&w=1932&auto=format&fit=crop",
        preview: "/Generative AI Primer_page-0001.jpg",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        title: "Hack-a-throne 1.0 by GeeksforGeeks",
        description: "Finalist among 700 participants, with theme focused on Artificial Intelligence.",
        image: "/gfghackathon.jpeg",
    },
    Achievement {
        title: "Volunteer at Paradox'24 IIT Madras",
        description: "Volunteered for Cultural, Sports, and Esports Programs and was awarded.",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?q=80&w=2070&auto=format&fit=crop",
    },
];
